use chrono::Datelike;
use gloo_timers::callback::Interval;
use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::countdown::CountdownText;
use crate::components::faq::FaqItem;
use crate::components::nav::Nav;
use crate::config;
use crate::content::{
    BONUSES, CHAPTERS, FAQS, HEADLINE, NOT_FAKE_FLEX, NOT_YOUR_FAULT, OUTCOMES, PACKAGE, PILLARS,
    PROBLEMS, SUBHEADLINE, TAGLINE,
};
use crate::state::page::{jump_to, PageAction, PageState};
use crate::state::sections::SECTIONS;
use crate::viewport::{DocumentScroller, SectionObserver};

#[function_component(Landing)]
pub fn landing() -> Html {
    let page = use_reducer(|| PageState::new(FAQS.len()));

    // One tick source for the lifetime of the page, cancelled on unmount.
    {
        let page = page.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1_000, move || {
                    page.dispatch(PageAction::Tick);
                });
                move || drop(interval)
            },
            (),
        );
    }

    {
        let page = page.clone();
        use_effect_with_deps(
            move |_| {
                let on_view = Callback::from(move |ids: Vec<String>| {
                    page.dispatch(PageAction::SectionsInView(ids));
                });
                let observer = match SectionObserver::attach(SECTIONS, on_view) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        warn!("Section highlighting disabled: {}", e);
                        None
                    }
                };
                move || drop(observer)
            },
            (),
        );
    }

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |id: &'static str| {
            info!("Navigating to section {}", id);
            jump_to(&DocumentScroller, |action| page.dispatch(action), id);
        })
    };

    let on_toggle_menu = {
        let page = page.clone();
        Callback::from(move |_: ()| page.dispatch(PageAction::ToggleMenu))
    };

    let on_toggle_faq = {
        let page = page.clone();
        Callback::from(move |index: usize| page.dispatch(PageAction::ToggleFaq(index)))
    };

    let get_access = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit("cta");
        })
    };

    let remaining = page.countdown.remaining();
    let year = chrono::Local::now().year();

    html! {
        <div class="rant-page">
            <Nav
                sections={SECTIONS}
                active={page.sections.active_id()}
                menu_open={page.menu.is_open()}
                on_navigate={on_navigate}
                on_toggle_menu={on_toggle_menu}
            />

            <main>
                <section id="hero" class="hero-section">
                    <div class="hero-backdrop"></div>
                    <div class="container narrow centered">
                        <div class="pill">{"⏱ Limited Time Offer"}</div>
                        <h1 class="hero-title">
                            <span class="gradient-text">{HEADLINE}</span>
                            <br />
                            {SUBHEADLINE}
                        </h1>
                        <p class="hero-tagline">{TAGLINE}</p>
                        <a href="#cta" class="cta-button" onclick={get_access}>
                            {"⬇ Get Instant Access"}
                        </a>
                    </div>
                </section>

                <section id="author" class="author-section">
                    <div class="container narrow author-layout">
                        <div class="author-photo">
                            <div class="author-ring">
                                <img src="/images/author.jpg" alt="Author" width="192" height="192" />
                            </div>
                            <div class="author-badge">{"👣 Barefoot Founder"}</div>
                        </div>
                        <div class="author-copy">
                            <h2>{"I Wrote This While Pacing Barefoot Around My Compound Screaming"}</h2>
                            <p class="aside">{"(Seriously. Ask my neighbors.)"}</p>
                            <p>{"Because I'd had "}<span class="highlight">{"enough"}</span>{"."}</p>
                            <p>
                                {"Enough of fake business gurus. Enough of ₦0 earnings after weeks of \"hustling.\" Enough of recycled YouTube advice that works for everyone... "}
                                <em>{"except you"}</em>{"."}
                            </p>
                            <blockquote>
                                {"If you're smart, hungry, and tired of nothing working — this might be the only business book you ever need."}
                            </blockquote>
                        </div>
                    </div>
                </section>

                <section id="problem" class="problem-section">
                    <div class="container narrow">
                        <h2 class="section-title"><span class="gradient-text">{"😤 Sound Familiar?"}</span></h2>
                        <div class="card-grid two">
                            { for PROBLEMS.iter().map(|item| html! {
                                <div class="card">
                                    <span class="card-icon">{"☹"}</span>
                                    <p>{*item}</p>
                                </div>
                            }) }
                        </div>
                        <div class="centered">
                            <div class="callout">
                                <p class="callout-title">{"But here's what nobody tells you:"}</p>
                                { for NOT_YOUR_FAULT.iter().map(|line| html! {
                                    <p class="zap-line">{"⚡ "}{*line}</p>
                                }) }
                            </div>
                            <p class="lead">
                                {"You're just being fed garbage advice that only works for trust fund babies and crypto kids."}
                            </p>
                        </div>
                    </div>
                </section>

                <section id="solution" class="solution-section">
                    <div class="container wide">
                        <div class="centered">
                            <h2 class="section-title"><span class="gradient-text">{"Introducing..."}</span></h2>
                            <h3 class="product-title">{"\"DON'T START A BUSINESS... UNTIL YOU READ THIS 37-PAGE RANT\""}</h3>
                            <p class="lead">{"The Brutally Honest Guide to Making Money Online (Without Losing Your Sanity)"}</p>
                        </div>
                        <div class="card-grid three">
                            { for PILLARS.iter().map(|pillar| html! {
                                <div class="card centered">
                                    <div class="card-emoji">{"⚠️"}</div>
                                    <h4>{pillar.title}</h4>
                                    <p>{pillar.body}</p>
                                </div>
                            }) }
                        </div>
                        <h3 class="chapters-title centered">
                            <span class="underlined">{"What You'll Learn (25 Chapters That Will Offend You Into Progress)"}</span>
                        </h3>
                        <div class="card-grid three compact">
                            { for CHAPTERS.iter().map(|chapter| html! {
                                <div class="card small">
                                    <p>{"✓ "}{*chapter}</p>
                                </div>
                            }) }
                        </div>
                        <div class="callout accent centered">
                            <p>{"⚡ If this list doesn't light a fire in your chest, this isn't for you."}</p>
                        </div>
                    </div>
                </section>

                <section id="bonuses" class="bonuses-section">
                    <div class="container wide">
                        <div class="centered">
                            <h2 class="section-title"><span class="gradient-text">{"🎁 Buy Now & Get These 4 Free Bonuses"}</span></h2>
                            <div class="pill large">{"⏱ For 72 Hours Only"}</div>
                        </div>
                        <div class="card-grid two">
                            { for BONUSES.iter().map(|bonus| html! {
                                <div class="card">
                                    <div class="card-emoji">{"🎁"}</div>
                                    <h4>{bonus.title}</h4>
                                    <p>{bonus.description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="testimonial" class="testimonial-section">
                    <div class="container narrow centered">
                        <h2 class="section-title">
                            <span class="underlined">{"✅ Real Talk: No Screenshots. Just Results That Matter."}</span>
                        </h2>
                        <div class="card padded">
                            <p class="lead">{"I'm not here to fake flex."}</p>
                            <ul class="cross-list">
                                { for NOT_FAKE_FLEX.iter().map(|line| html! {
                                    <li>{"✕ "}{*line}</li>
                                }) }
                            </ul>
                            <p class="lead">
                                {"But I "}<span class="highlight">{"do"}</span>
                                {" make money online. On my terms. From a business I actually enjoy. Without selling nonsense."}
                            </p>
                            <p class="lead">{"And this rant? It's the brain-clarifier you've been missing."}</p>
                        </div>
                    </div>
                </section>

                <section id="pricing" class="pricing-section">
                    <div class="container narrow centered">
                        <h2 class="section-title"><span class="gradient-text">{"Here's Everything You Get"}</span></h2>
                        <p class="lead">{"For Less Than Transport & Shawarma"}</p>
                        <div class="card accent padded">
                            <ul class="check-list">
                                { for PACKAGE.iter().map(|item| html! {
                                    <li>{"✓ "}{*item}</li>
                                }) }
                            </ul>
                            <p class="price-caption">{"All for just:"}</p>
                            <p class="price">{config::PRICE_LABEL}</p>
                            <p><em>{"That's less than what you'll spend on two shawarma + Uber + Fanta."}</em></p>
                            <p class="bold">{"But this might change your life."}</p>
                        </div>
                        <div class="card padded">
                            <p class="urgent">
                                {"⏱ Bonuses Expire In: "}<CountdownText remaining={remaining} />
                            </p>
                            <p>{"Why the urgency? Because indecision is killing your progress."}</p>
                            <p>{"If you can't make one bold move in 3 days... How do you plan to run a business?"}</p>
                            <p class="highlight bold">{"Clock's ticking."}</p>
                        </div>
                    </div>
                </section>

                <section id="faq" class="faq-section">
                    <div class="container narrow">
                        <h2 class="section-title centered">
                            <span class="underlined">{"❓ Unapologetically Real FAQs"}</span>
                        </h2>
                        <div class="faq-list">
                            { for FAQS.iter().enumerate().map(|(index, faq)| html! {
                                <FaqItem
                                    key={index}
                                    index={index}
                                    question={faq.question}
                                    answer={faq.answer}
                                    open={page.faq.is_open(index)}
                                    on_toggle={on_toggle_faq.clone()}
                                />
                            }) }
                        </div>
                    </div>
                </section>

                <section id="cta" class="cta-section">
                    <div class="container narrow centered">
                        <h2 class="section-title"><span class="gradient-text">{"What Happens When You Download It?"}</span></h2>
                        <div class="card-grid three">
                            { for OUTCOMES.iter().map(|item| html! {
                                <div class="card">
                                    <div class="card-emoji">{"⚡"}</div>
                                    <p>{*item}</p>
                                </div>
                            }) }
                        </div>
                        <p class="lead">{"This rant doesn't motivate. It activates."}</p>
                        <div class="card accent padded">
                            <h3>{"👇 Ready To Start For Real?"}</h3>
                            <p>{format!("Get the 37-Page Rant + All 4 Bonuses — For Just {}", config::PRICE_LABEL)}</p>
                            <div class="cta-perks">
                                <p>{"⬇ Instant Access"}</p>
                                <p>{"✓ Refund Guarantee"}</p>
                                <p class="urgent">
                                    {"⏱ Bonuses Disappear in "}<CountdownText remaining={remaining} />
                                </p>
                            </div>
                            <a href={config::get_purchase_url()} class="cta-button">
                                {"⬇ Download The Rant Now"}
                            </a>
                        </div>
                        <div class="card padded ps">
                            <h4>{"📝 P.S."}</h4>
                            <p>{"This isn't a course. It's not a webinar. It's not fluff."}</p>
                            <p>{"It's 37 pages of brutal honesty, clarity, and direction."}</p>
                            <p>{"If you're tired of guessing... Tired of watching others win... Tired of \"trying everything\" and still being broke..."}</p>
                            <p class="highlight bold">{"This is your reset button."}</p>
                            <p>{format!("{}. 72 hours. All upside.", config::PRICE_LABEL)}</p>
                            <p class="highlight bold big">{"Your move."}</p>
                        </div>
                    </div>
                </section>
            </main>

            <footer id="footer" class="rant-footer">
                <p>{format!("© {} {}. All rights reserved.", year, config::SITE_NAME)}</p>
                <p class="fine-print">{"This is not a get-rich-quick scheme. Real work required. Results not typical."}</p>
            </footer>

            <style>
                {r#"
                .rant-page {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #111827, #1f2937);
                    color: #f3f4f6;
                    font-family: 'Inter', sans-serif;
                }

                .top-nav {
                    position: fixed;
                    width: 100%;
                    z-index: 50;
                    background: rgba(17, 24, 39, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #1f2937;
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #fbbf24, #f97316);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .nav-desktop {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link,
                .nav-mobile-link {
                    background: none;
                    border: none;
                    color: #d1d5db;
                    font-size: 0.875rem;
                    font-weight: 500;
                    padding: 0.5rem 0.75rem;
                    border-radius: 6px;
                    cursor: pointer;
                    transition: all 0.2s;
                }

                .nav-link:hover {
                    color: #fcd34d;
                }

                .nav-link.active-nav-item {
                    background: rgba(245, 158, 11, 0.1);
                    color: #fbbf24;
                    border-bottom: 2px solid #fbbf24;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #d1d5db;
                    width: 24px;
                    height: 24px;
                    padding: 0;
                    cursor: pointer;
                }

                .nav-mobile {
                    padding: 0.5rem 0.5rem 1rem;
                }

                .nav-mobile-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    font-size: 1rem;
                }

                .nav-mobile-link.active-nav-item {
                    background: rgba(245, 158, 11, 0.1);
                    color: #fbbf24;
                }

                .container {
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    position: relative;
                }

                .container.narrow { max-width: 56rem; }
                .container.wide { max-width: 64rem; }
                .centered { text-align: center; }

                section {
                    padding: 5rem 0;
                }

                .hero-section {
                    position: relative;
                    padding: 10rem 0 7rem;
                    overflow: hidden;
                }

                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    background: url('/images/grid.svg');
                    opacity: 0.1;
                }

                .pill {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(245, 158, 11, 0.1);
                    border: 1px solid rgba(251, 191, 36, 0.3);
                    color: #fcd34d;
                    font-size: 0.875rem;
                    margin-bottom: 1.5rem;
                }

                .pill.large {
                    font-size: 1.125rem;
                    font-weight: 700;
                }

                .hero-title {
                    font-family: 'Playfair Display', serif;
                    font-size: 3.75rem;
                    line-height: 1.2;
                    margin-bottom: 1.5rem;
                }

                .hero-tagline {
                    font-size: 1.5rem;
                    color: #d1d5db;
                    max-width: 48rem;
                    margin: 0 auto 2.5rem;
                }

                .gradient-text {
                    background: linear-gradient(90deg, #fbbf24, #f97316);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .underlined {
                    border-bottom: 2px solid #fbbf24;
                    padding-bottom: 0.5rem;
                }

                .cta-button {
                    display: inline-block;
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    background: linear-gradient(90deg, #f59e0b, #f97316);
                    color: #111827;
                    font-weight: 700;
                    font-size: 1.125rem;
                    text-decoration: none;
                    box-shadow: 0 10px 15px rgba(245, 158, 11, 0.2);
                    transition: transform 0.2s;
                }

                .cta-button:hover {
                    transform: scale(1.02);
                }

                .author-section {
                    background: rgba(31, 41, 55, 0.5);
                    border-top: 1px solid #374151;
                    border-bottom: 1px solid #374151;
                    padding: 4rem 0;
                }

                .author-layout {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }

                .author-photo {
                    position: relative;
                    flex-shrink: 0;
                }

                .author-ring {
                    width: 12rem;
                    height: 12rem;
                    border-radius: 50%;
                    padding: 4px;
                    background: linear-gradient(135deg, #fbbf24, #f97316);
                }

                .author-ring img {
                    width: 100%;
                    height: 100%;
                    border-radius: 50%;
                    object-fit: cover;
                }

                .author-badge {
                    position: absolute;
                    bottom: -0.5rem;
                    right: -0.5rem;
                    background: #111827;
                    border: 2px solid #1f2937;
                    border-radius: 9999px;
                    padding: 0.25rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: #fbbf24;
                }

                .author-copy p {
                    color: #d1d5db;
                    margin-bottom: 1rem;
                }

                .author-copy blockquote {
                    border-left: 4px solid #fbbf24;
                    padding: 0.5rem 1rem;
                    margin: 1.5rem 0;
                    color: #fcd34d;
                    background: rgba(31, 41, 55, 0.5);
                }

                .section-title {
                    font-family: 'Playfair Display', serif;
                    font-size: 2.5rem;
                    margin-bottom: 4rem;
                }

                .product-title {
                    font-family: 'Playfair Display', serif;
                    font-size: 3rem;
                    margin-bottom: 1.5rem;
                }

                .chapters-title {
                    font-size: 1.75rem;
                    margin-bottom: 2rem;
                }

                .card-grid {
                    display: grid;
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }

                .card-grid.two { grid-template-columns: repeat(2, 1fr); }
                .card-grid.three { grid-template-columns: repeat(3, 1fr); }
                .card-grid.compact { gap: 1rem; margin-bottom: 2.5rem; }

                .card {
                    background: rgba(31, 41, 55, 0.5);
                    border: 1px solid #374151;
                    border-radius: 8px;
                    padding: 1.5rem;
                    color: #d1d5db;
                    transition: border-color 0.2s;
                    margin-bottom: 2.5rem;
                }

                .card-grid .card { margin-bottom: 0; }
                .card:hover { border-color: rgba(251, 191, 36, 0.3); }
                .card.small { padding: 1rem; }
                .card.padded { padding: 2rem; max-width: 42rem; margin-left: auto; margin-right: auto; }
                .card.accent { border-color: rgba(251, 191, 36, 0.3); }
                .card h4 { font-size: 1.25rem; margin-bottom: 0.75rem; color: #f3f4f6; }

                .card-icon { color: #fbbf24; margin-right: 1rem; }
                .card-emoji { font-size: 2.5rem; margin-bottom: 1rem; color: #fbbf24; }

                .callout {
                    display: inline-block;
                    background: rgba(31, 41, 55, 0.5);
                    border: 1px solid #374151;
                    border-radius: 8px;
                    padding: 1rem 1.5rem;
                    margin-bottom: 2rem;
                }

                .callout.accent {
                    display: block;
                    max-width: 42rem;
                    margin: 0 auto;
                    color: #fbbf24;
                    font-weight: 700;
                    border-color: rgba(251, 191, 36, 0.3);
                }

                .callout-title {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fbbf24;
                    margin-bottom: 0.5rem;
                }

                .zap-line { color: #d1d5db; }
                .lead { font-size: 1.125rem; color: #d1d5db; margin-bottom: 1.5rem; }
                .highlight { color: #fcd34d; font-weight: 700; }
                .bold { font-weight: 700; }
                .big { font-size: 1.25rem; }
                .urgent { color: #f87171; font-weight: 700; margin-bottom: 1rem; }

                .cross-list,
                .check-list {
                    list-style: none;
                    text-align: left;
                    max-width: 28rem;
                    margin: 0 auto 2rem;
                }

                .cross-list li,
                .check-list li { margin-bottom: 1rem; }

                .price-caption { color: #9ca3af; font-size: 0.875rem; }
                .price { font-size: 2.25rem; font-weight: 700; color: #fbbf24; margin-bottom: 1.5rem; }

                .pricing-section {
                    background: #111827;
                    border-top: 1px solid #1f2937;
                    border-bottom: 1px solid #1f2937;
                }

                .solution-section,
                .testimonial-section { background: rgba(31, 41, 55, 0.3); }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .faq-item {
                    background: rgba(31, 41, 55, 0.5);
                    border: 1px solid #374151;
                    border-radius: 8px;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 1.5rem;
                    background: none;
                    border: none;
                    text-align: left;
                    color: #f3f4f6;
                    cursor: pointer;
                }

                .faq-question h3 { font-size: 1.125rem; font-weight: 500; }

                .faq-chevron {
                    width: 20px;
                    height: 20px;
                    color: #9ca3af;
                    transition: transform 0.2s;
                }

                .faq-item.open .faq-chevron { transform: rotate(180deg); }

                .faq-answer {
                    padding: 0 1.5rem 1rem;
                    color: #d1d5db;
                }

                .cta-perks p { margin-bottom: 0.75rem; }
                .ps p { margin-bottom: 1rem; }

                .rant-footer {
                    padding: 3rem 1.5rem;
                    background: #111827;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                    color: #9ca3af;
                }

                .fine-print { color: #6b7280; font-size: 0.875rem; margin-top: 1rem; }

                @media (max-width: 768px) {
                    .nav-desktop { display: none; }
                    .burger-menu { display: block; }
                    .hero-title { font-size: 2.25rem; }
                    .hero-tagline { font-size: 1.25rem; }
                    .product-title { font-size: 2.25rem; }
                    .section-title { font-size: 1.875rem; }
                    .author-layout { flex-direction: column; }
                    .card-grid.two,
                    .card-grid.three { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
