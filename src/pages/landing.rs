use web_sys::js_sys;
use yew::prelude::*;

use crate::components::chat_preview::{ChatPreview, PreviewMode, PreviewVariant};
use crate::components::chat_script::Turn;
use crate::components::faq::FaqItem;
use crate::components::use_cases::UseCasesSlider;
use crate::config;

/// Conversation played by the hero chat previews.
fn preview_script() -> Vec<Turn> {
    vec![
        Turn::assistant("Hola, soy HeyLuni 👋 ¿En qué te ayudo hoy?"),
        Turn::user("Hazme un resumen de este texto largo."),
        Turn::assistant("Claro. Aquí van los puntos clave en 5 bullets…"),
        Turn::user("Recuérdame mañana a las 9am enviarlo."),
        Turn::assistant("Listo. Te escribo mañana a las 9:00 ✅"),
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let wa_link = config::whatsapp_link();
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <header class="nav">
                <div class="container nav-inner">
                    <div class="brand">
                        <span class="brand-mark" aria-hidden="true">{"💬"}</span>
                        <span class="brand-text">{"HeyLuni"}</span>
                    </div>
                    <nav class="nav-links">
                        <a href="#how">{"Cómo funciona"}</a>
                        <a href="#usecases">{"Casos"}</a>
                        <a href="#pricing">{"Precio"}</a>
                        <a href="#faqs">{"FAQs"}</a>
                    </nav>
                    <a class="btn btn-primary" href={wa_link.clone()} target="_blank" rel="noopener noreferrer">
                        {"Habla con HeyLuni"}
                    </a>
                </div>
            </header>

            <main>
                <section class="hero">
                    <div class="container hero-inner">
                        <div class="hero-copy">
                            <span class="eyebrow">{"WhatsApp + IA"}</span>
                            <h1>{"Tu asistente personal, directo en WhatsApp"}</h1>
                            <p class="subtitle">{"Ideas, recordatorios, resúmenes y redacción. Respuestas claras en segundos, 24/7."}</p>
                            <div class="badges"><span class="badge badge-free">{"100% gratis"}</span></div>
                            <div class="cta-group">
                                <a class="btn btn-primary btn-lg" href={wa_link.clone()} target="_blank" rel="noopener noreferrer">{"Hablar ahora en WhatsApp"}</a>
                                <a class="btn btn-outline btn-lg" href="#how">{"Ver cómo funciona"}</a>
                            </div>
                            <div class="perks">
                                <div class="perk">
                                    <i class="perk-icon fa-solid fa-bolt" aria-hidden="true"></i>
                                    <span>{"Rápido"}</span>
                                </div>
                                <div class="perk">
                                    <i class="perk-icon fa-solid fa-calendar-days" aria-hidden="true"></i>
                                    <span>{"Recordatorios simples"}</span>
                                </div>
                                <div class="perk">
                                    <i class="perk-icon fa-solid fa-eye" aria-hidden="true"></i>
                                    <span>{"Mensajes claros"}</span>
                                </div>
                            </div>
                            <div class="hero-mobile-bubbles">
                                <ChatPreview script={preview_script()} variant={PreviewVariant::Inline} />
                            </div>
                        </div>
                        <div class="hero-visual">
                            <ChatPreview script={preview_script()} />
                        </div>
                    </div>
                </section>

                <section id="how" class="section how-it-works alt">
                    <div class="container">
                        <div class="section-header">
                            <span class="section-eyebrow">{"Empezar es fácil"}</span>
                            <h2 class="section-title">{"¿Cómo funciona?"}</h2>
                            <p class="lead">{"En tres pasos simples empiezas a usar HeyLuni."}</p>
                        </div>
                        <div class="split-grid">
                            <div class="steps">
                                <div class="step">
                                    <i class="step-icon fa-solid fa-headset" aria-hidden="true"></i>
                                    <h3>{"Escríbele por WhatsApp"}</h3>
                                    <p>{"Toca el botón y abre el chat con HeyLuni."}</p>
                                    <div class="example-chat">
                                        <ChatPreview
                                            script={vec![Turn::user("Hola HeyLuni 👋")]}
                                            variant={PreviewVariant::Inline}
                                            mode={PreviewMode::Static}
                                        />
                                    </div>
                                </div>
                                <div class="step">
                                    <i class="step-icon fa-solid fa-pen-to-square" aria-hidden="true"></i>
                                    <h3>{"Pide lo que quieras"}</h3>
                                    <p>{"Ideas, resúmenes, recordatorios, redacción, listas y más."}</p>
                                    <div class="example-chat">
                                        <ChatPreview
                                            script={vec![Turn::user("Redáctame un mensaje de bienvenida")]}
                                            variant={PreviewVariant::Inline}
                                            mode={PreviewMode::Static}
                                        />
                                    </div>
                                </div>
                                <div class="step">
                                    <i class="step-icon fa-solid fa-bolt" aria-hidden="true"></i>
                                    <h3>{"Recibe respuesta en segundos"}</h3>
                                    <p>{"Mensajes claros para que avances sin fricción."}</p>
                                    <div class="example-chat">
                                        <ChatPreview
                                            script={vec![Turn::assistant("Listo, aquí tienes un texto breve y claro ✨")]}
                                            variant={PreviewVariant::Inline}
                                            mode={PreviewMode::Static}
                                        />
                                    </div>
                                </div>
                            </div>
                            <aside class="side-card">
                                <i class="side-icon fa-solid fa-lightbulb" aria-hidden="true"></i>
                                <h3>{"Consejos para empezar"}</h3>
                                <p>{"Pequeños trucos para mejores respuestas."}</p>
                                <ul class="checklist">
                                    <li><i class="fa-solid fa-check" aria-hidden="true"></i>{"Sé específico con lo que necesitas"}</li>
                                    <li><i class="fa-solid fa-check" aria-hidden="true"></i>{"Indica formato: lista, puntos o tono"}</li>
                                    <li><i class="fa-solid fa-check" aria-hidden="true"></i>{"Da contexto si es relevante"}</li>
                                </ul>
                            </aside>
                        </div>
                    </div>
                </section>

                <section class="section features">
                    <div class="container">
                        <div class="section-header">
                            <span class="section-eyebrow">{"Por qué HeyLuni"}</span>
                            <h2 class="section-title">{"Hecho para moverte más rápido"}</h2>
                        </div>
                        <div class="grid">
                            <div class="feature">
                                <i class="feature-icon fa-solid fa-gauge-high" aria-hidden="true"></i>
                                <h3>{"Respuestas en segundos"}</h3>
                                <p>{"Para no perder el hilo"}</p>
                            </div>
                            <div class="feature">
                                <i class="feature-icon fa-solid fa-clock" aria-hidden="true"></i>
                                <h3>{"Disponibilidad"}</h3>
                                <p>{"Disponible 24/7"}</p>
                                <p>{"Siempre a un mensaje"}</p>
                            </div>
                            <div class="feature">
                                <i class="feature-icon fa-solid fa-handshake" aria-hidden="true"></i>
                                <h3>{"Sencillo"}</h3>
                                <p>{"Sin apps nuevas"}</p>
                                <p>{"Solo WhatsApp"}</p>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="usecases" class="section usecases alt">
                    <div class="container">
                        <div class="section-header">
                            <span class="section-eyebrow">{"Ideas al instante"}</span>
                            <h2 class="section-title">{"Casos de uso"}</h2>
                        </div>
                        <UseCasesSlider />
                    </div>
                </section>

                <section class="section privacy">
                    <div class="container">
                        <div class="section-header">
                            <span class="section-eyebrow">{"Tu información importa"}</span>
                            <h2 class="section-title">{"Privacidad y tranquilidad"}</h2>
                        </div>
                        <div class="icon-list">
                            <div class="icon-item">
                                <i class="item-icon fa-solid fa-fingerprint" aria-hidden="true"></i>
                                <div>
                                    <h4>{"Tus datos, tuyos"}</h4>
                                    <p>{"Usamos tus mensajes solo para responderte mejor."}</p>
                                </div>
                            </div>
                            <div class="icon-item">
                                <i class="item-icon fa-solid fa-lock" aria-hidden="true"></i>
                                <div>
                                    <h4>{"Seguridad"}</h4>
                                    <p>{"Buenas prácticas y cifrado en tránsito."}</p>
                                </div>
                            </div>
                            <div class="icon-item">
                                <i class="item-icon fa-solid fa-eye-slash" aria-hidden="true"></i>
                                <div>
                                    <h4>{"Sin spam"}</h4>
                                    <p>{"Solo mensajes cuando tú lo pidas o programes."}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="pricing" class="section pricing alt">
                    <div class="container">
                        <div class="section-header">
                            <span class="section-eyebrow">{"Beta"}</span>
                            <h2 class="section-title">{"Precio"}</h2>
                        </div>
                        <div class="pricing-grid">
                            <div class="plan">
                                <div class="plan-badge">{"Beta"}</div>
                                <h3>{"Acceso anticipado"}</h3>
                                <p class="plan-price">{"Gratis"}</p>
                                <ul class="plan-list">
                                    <li>{"• Respuestas rápidas ilimitadas"}</li>
                                    <li>{"• Recordatorios básicos"}</li>
                                    <li>{"• Soporte por chat"}</li>
                                </ul>
                                <a class="btn btn-primary btn-lg" href={wa_link.clone()} target="_blank" rel="noopener noreferrer">
                                    {"Probar ahora en WhatsApp"}
                                </a>
                            </div>
                            <aside class="pricing-side">
                                <h3>{"Construyamos HeyLuni juntos"}</h3>
                                <p class="lead">{"Tu feedback guía el producto. ¿Qué te gustaría que haga?"}</p>
                            </aside>
                        </div>
                    </div>
                </section>

                <section id="faqs" class="section faqs">
                    <div class="container">
                        <div class="section-header">
                            <span class="section-eyebrow">{"Antes de empezar"}</span>
                            <h2 class="section-title">{"Preguntas frecuentes"}</h2>
                        </div>
                        <div class="faq-list">
                            <FaqItem question="¿Necesito instalar algo?" id="faq-instalar">
                                <p>{"No. HeyLuni funciona directamente en tu WhatsApp."}</p>
                            </FaqItem>
                            <FaqItem question="¿Tiene costo?" id="faq-costo">
                                <p>{"Durante la beta, usar HeyLuni es gratis."}</p>
                            </FaqItem>
                            <FaqItem question="¿Puedo programar recordatorios?" id="faq-recordatorios">
                                <p>{"Sí. Indica el día y la hora y HeyLuni te escribe."}</p>
                            </FaqItem>
                        </div>
                    </div>
                </section>

                <section class="band callout">
                    <div class="container callout-inner">
                        <div class="callout-copy">
                            <span class="section-eyebrow">{"Listo en segundos"}</span>
                            <h3>{"Prueba HeyLuni ahora"}</h3>
                            <p class="lead">{"Sin registro, sin descargas. Abre el chat y pide lo que necesites."}</p>
                        </div>
                        <a class="btn btn-primary btn-lg" href={wa_link.clone()} target="_blank" rel="noopener noreferrer">
                            {"Hablar en WhatsApp"}
                        </a>
                    </div>
                </section>
            </main>

            <footer class="footer">
                <div class="container footer-inner">
                    <span>{ format!("© {} HeyLuni", year) }</span>
                    <a class="btn btn-outline" href={wa_link} target="_blank" rel="noopener noreferrer">
                        {"Abrir WhatsApp"}
                    </a>
                </div>
            </footer>

            <style>
                {r#"
                .page {
                    min-height: 100vh;
                    background: #f6f8f7;
                    color: #16261e;
                    font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
                }

                .container {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                /* Navigation */
                .nav {
                    position: sticky;
                    top: 0;
                    z-index: 10;
                    background: rgba(246, 248, 247, 0.92);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid rgba(22, 38, 30, 0.08);
                }

                .nav-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding-top: 0.8rem;
                    padding-bottom: 0.8rem;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    font-size: 1.2rem;
                }

                .nav-links {
                    display: flex;
                    gap: 1.25rem;
                }

                .nav-links a {
                    color: #3d554a;
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.2s ease;
                }

                .nav-links a:hover {
                    color: #128C7E;
                }

                /* Buttons */
                .btn {
                    display: inline-block;
                    border: none;
                    border-radius: 999px;
                    padding: 0.6rem 1.3rem;
                    font-size: 0.95rem;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    transition: transform 0.15s ease, box-shadow 0.15s ease;
                }

                .btn-primary {
                    background: #25D366;
                    color: #08261a;
                }

                .btn-primary:hover {
                    transform: translateY(-1px);
                    box-shadow: 0 6px 18px rgba(37, 211, 102, 0.35);
                }

                .btn-outline {
                    background: transparent;
                    color: #128C7E;
                    border: 1px solid #128C7E;
                }

                .btn-outline:hover {
                    background: rgba(18, 140, 126, 0.08);
                }

                .btn-lg {
                    padding: 0.85rem 1.7rem;
                    font-size: 1.05rem;
                }

                /* Hero */
                .hero {
                    padding: 4.5rem 0 3.5rem;
                }

                .hero-inner {
                    display: grid;
                    grid-template-columns: 1.1fr 0.9fr;
                    gap: 3rem;
                    align-items: center;
                }

                .eyebrow, .section-eyebrow {
                    display: inline-block;
                    color: #128C7E;
                    font-weight: 700;
                    font-size: 0.85rem;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    margin-bottom: 0.6rem;
                }

                .hero h1 {
                    font-size: 2.8rem;
                    line-height: 1.15;
                    margin: 0 0 1rem;
                }

                .subtitle {
                    font-size: 1.2rem;
                    color: #3d554a;
                    margin-bottom: 1rem;
                }

                .badge-free {
                    display: inline-block;
                    background: rgba(37, 211, 102, 0.15);
                    color: #0b7a4b;
                    border-radius: 999px;
                    padding: 0.25rem 0.8rem;
                    font-size: 0.85rem;
                    font-weight: 700;
                    margin-bottom: 1.2rem;
                }

                .cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.8rem;
                    margin-bottom: 1.6rem;
                }

                .perks {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.4rem;
                    color: #3d554a;
                    font-size: 0.95rem;
                }

                .perk {
                    display: flex;
                    align-items: center;
                    gap: 0.45rem;
                }

                .perk-icon {
                    color: #128C7E;
                }

                .hero-mobile-bubbles {
                    display: none;
                }

                /* Chat preview */
                .chat-card {
                    background: #e5ddd5;
                    border-radius: 18px;
                    padding: 1.2rem;
                    min-height: 340px;
                    display: flex;
                    flex-direction: column;
                    gap: 0.55rem;
                    box-shadow: 0 18px 40px rgba(22, 38, 30, 0.15);
                }

                .chat-inline {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .chat-row {
                    display: flex;
                }

                .chat-row.left {
                    justify-content: flex-start;
                }

                .chat-row.right {
                    justify-content: flex-end;
                }

                .bubble {
                    max-width: 85%;
                    background: #ffffff;
                    border-radius: 14px;
                    border-bottom-left-radius: 4px;
                    padding: 0.55rem 0.85rem;
                    font-size: 0.95rem;
                    box-shadow: 0 1px 2px rgba(22, 38, 30, 0.12);
                    animation: bubble-in 0.25s ease;
                }

                .chat-row.right .bubble {
                    border-radius: 14px;
                    border-bottom-right-radius: 4px;
                }

                .bubble.green {
                    background: #dcf8c6;
                }

                @keyframes bubble-in {
                    from { opacity: 0; transform: translateY(6px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .bubble.typing {
                    display: flex;
                    gap: 0.3rem;
                    align-items: center;
                    padding: 0.7rem 0.9rem;
                }

                .bubble.typing .dot {
                    width: 7px;
                    height: 7px;
                    border-radius: 50%;
                    background: #9ab0a5;
                    animation: typing-dot 1s infinite;
                }

                .bubble.typing .dot:nth-child(2) {
                    animation-delay: 0.2s;
                }

                .bubble.typing .dot:nth-child(3) {
                    animation-delay: 0.4s;
                }

                @keyframes typing-dot {
                    0%, 60%, 100% { transform: translateY(0); opacity: 0.5; }
                    30% { transform: translateY(-4px); opacity: 1; }
                }

                /* Sections */
                .section {
                    padding: 4rem 0;
                }

                .section.alt {
                    background: #ffffff;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .section-title {
                    font-size: 2.1rem;
                    margin: 0 0 0.6rem;
                }

                .lead {
                    color: #3d554a;
                    font-size: 1.1rem;
                }

                /* How it works */
                .split-grid {
                    display: grid;
                    grid-template-columns: 1.3fr 0.7fr;
                    gap: 2.5rem;
                    align-items: start;
                }

                .steps {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .step-icon, .side-icon {
                    font-size: 1.6rem;
                    color: #128C7E;
                    margin-bottom: 0.5rem;
                }

                .step h3 {
                    margin: 0.2rem 0 0.4rem;
                }

                .step p {
                    color: #3d554a;
                    margin: 0 0 0.6rem;
                }

                .example-chat .bubble {
                    font-size: 0.85rem;
                    padding: 0.45rem 0.7rem;
                }

                .side-card {
                    background: #f6f8f7;
                    border: 1px solid rgba(22, 38, 30, 0.08);
                    border-radius: 16px;
                    padding: 1.5rem;
                }

                .checklist {
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0 0;
                }

                .checklist li {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    padding: 0.35rem 0;
                    color: #3d554a;
                }

                .checklist i {
                    color: #25D366;
                }

                /* Features */
                .grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .feature {
                    background: #ffffff;
                    border: 1px solid rgba(22, 38, 30, 0.08);
                    border-radius: 16px;
                    padding: 1.6rem;
                    text-align: center;
                }

                .feature-icon {
                    font-size: 1.8rem;
                    color: #128C7E;
                    margin-bottom: 0.7rem;
                }

                .feature p {
                    color: #3d554a;
                    margin: 0.2rem 0;
                }

                /* Use-cases carousel */
                .carousel {
                    overflow: hidden;
                    mask-image: linear-gradient(to right, transparent, black 8%, black 92%, transparent);
                }

                .carousel-track {
                    display: flex;
                    gap: 1rem;
                    width: max-content;
                    animation: carousel-scroll 30s linear infinite;
                }

                .carousel:hover .carousel-track {
                    animation-play-state: paused;
                }

                @keyframes carousel-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }

                .slide {
                    display: flex;
                    align-items: center;
                    gap: 0.8rem;
                    background: #f6f8f7;
                    border: 1px solid rgba(22, 38, 30, 0.08);
                    border-radius: 14px;
                    padding: 1rem 1.2rem;
                    min-width: 240px;
                }

                .slide-icon {
                    font-size: 1.4rem;
                    color: #128C7E;
                }

                .slide-title {
                    font-weight: 700;
                }

                .slide-desc {
                    color: #3d554a;
                    font-size: 0.9rem;
                }

                /* Privacy */
                .icon-list {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .icon-item {
                    display: flex;
                    gap: 0.9rem;
                    align-items: flex-start;
                }

                .item-icon {
                    font-size: 1.5rem;
                    color: #128C7E;
                    margin-top: 0.2rem;
                }

                .icon-item h4 {
                    margin: 0 0 0.3rem;
                }

                .icon-item p {
                    margin: 0;
                    color: #3d554a;
                }

                /* Pricing */
                .pricing-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                    align-items: center;
                }

                .plan {
                    position: relative;
                    background: #ffffff;
                    border: 1px solid rgba(37, 211, 102, 0.4);
                    border-radius: 18px;
                    padding: 2rem;
                    box-shadow: 0 12px 30px rgba(22, 38, 30, 0.08);
                }

                .plan-badge {
                    position: absolute;
                    top: -0.8rem;
                    left: 1.5rem;
                    background: #25D366;
                    color: #08261a;
                    border-radius: 999px;
                    padding: 0.2rem 0.9rem;
                    font-size: 0.8rem;
                    font-weight: 700;
                }

                .plan-price {
                    font-size: 2.2rem;
                    font-weight: 800;
                    margin: 0.4rem 0 1rem;
                }

                .plan-list {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 1.4rem;
                    color: #3d554a;
                }

                .plan-list li {
                    padding: 0.25rem 0;
                }

                /* FAQ */
                .faq-list {
                    max-width: 720px;
                    margin: 0 auto;
                }

                .faq-item {
                    border-bottom: 1px solid rgba(22, 38, 30, 0.1);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    padding: 1.1rem 0.2rem;
                    font-size: 1.05rem;
                    font-weight: 600;
                    color: #16261e;
                    cursor: pointer;
                    text-align: left;
                }

                .toggle-icon {
                    color: #128C7E;
                    font-size: 1.3rem;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                    color: #3d554a;
                    padding: 0 0.2rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 300px;
                    padding: 0 0.2rem 1.1rem;
                }

                /* Callout band */
                .band.callout {
                    background: linear-gradient(120deg, #075E54, #128C7E);
                    color: #ffffff;
                    padding: 3rem 0;
                }

                .callout-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    flex-wrap: wrap;
                }

                .callout .section-eyebrow {
                    color: #9cf0c5;
                }

                .callout .lead {
                    color: rgba(255, 255, 255, 0.85);
                }

                /* Footer */
                .footer {
                    padding: 1.6rem 0;
                }

                .footer-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    color: #3d554a;
                }

                @media (max-width: 880px) {
                    .hero-inner {
                        grid-template-columns: 1fr;
                    }

                    .hero-visual {
                        display: none;
                    }

                    .hero-mobile-bubbles {
                        display: block;
                        margin-top: 1.6rem;
                    }

                    .hero h1 {
                        font-size: 2.1rem;
                    }

                    .nav-links {
                        display: none;
                    }

                    .split-grid,
                    .grid,
                    .icon-list,
                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
