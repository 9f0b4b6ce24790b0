use yew::prelude::*;

struct UseCase {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const USE_CASES: [UseCase; 6] = [
    UseCase {
        icon: "fa-solid fa-book-open",
        title: "Resúmenes",
        desc: "De textos largos a puntos clave.",
    },
    UseCase {
        icon: "fa-solid fa-calendar-days",
        title: "Recordatorios",
        desc: "Fechas y pendientes sin olvidar.",
    },
    UseCase {
        icon: "fa-solid fa-feather",
        title: "Redacción",
        desc: "Mensajes y emails con buen tono.",
    },
    UseCase {
        icon: "fa-solid fa-gem",
        title: "Ideas",
        desc: "Brainstorming para proyectos y contenidos.",
    },
    UseCase {
        icon: "fa-solid fa-globe",
        title: "Búsqueda",
        desc: "Encuentra info y entiéndela fácil.",
    },
    UseCase {
        icon: "fa-solid fa-check",
        title: "Tareas",
        desc: "Listas y siguientes acciones.",
    },
];

/// Horizontal carousel of use-case cards. The list is rendered twice so the
/// pure-CSS scroll animation can loop without a visible seam.
#[function_component(UseCasesSlider)]
pub fn use_cases_slider() -> Html {
    html! {
        <div class="carousel" role="region" aria-label="Casos de uso">
            <div class="carousel-track">
                { for USE_CASES.iter().chain(USE_CASES.iter()).map(|it| html! {
                    <div class="slide" aria-label={format!("{}: {}", it.title, it.desc)}>
                        <i class={format!("slide-icon {}", it.icon)} aria-hidden="true"></i>
                        <div class="slide-copy">
                            <div class="slide-title">{ it.title }</div>
                            <div class="slide-desc">{ it.desc }</div>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
