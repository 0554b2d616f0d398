use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::Local;
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::{Toast, ToastView, DISMISS_MS};
use crate::config;
use crate::confetti;
use crate::countdown::Countdown;
use crate::subscribe::{self, Outcome};

#[function_component(ComingSoon)]
pub fn coming_soon() -> Html {
    let email = use_state(String::new);
    let toast = use_state(|| None::<Toast>);
    let time_left = use_state(|| Countdown::at(config::launch_date(), Local::now().naive_local()));

    // Tick once per second until launch; the interval handle lives for the
    // mounted lifetime and is dropped on every exit path.
    {
        let time_left = time_left.clone();
        use_effect_with_deps(
            move |_| {
                let launch_at = config::launch_date();
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let interval_handle_for_cleanup = interval_handle.clone();
                // One-shot latch: crossing the launch line fires the
                // celebration exactly once, regardless of tick jitter.
                let celebrated = Rc::new(Cell::new(false));

                let interval = Interval::new(1_000, move || {
                    let state = Countdown::at(launch_at, Local::now().naive_local());
                    if state.launched && !celebrated.get() {
                        celebrated.set(true);
                        if let Some(interval) = interval_handle.borrow_mut().take() {
                            drop(interval);
                        }
                        confetti::play();
                    }
                    time_left.set(state);
                });
                *interval_handle_for_cleanup.borrow_mut() = Some(interval);

                move || {
                    if let Some(interval) = interval_handle_for_cleanup.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (),
        );
    }

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submitted = (*email).clone();
            let email = email.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let outcome = subscribe::submit(&submitted).await;
                if outcome == Outcome::Accepted {
                    email.set(String::new());
                }
                toast.set(Some(Toast::for_outcome(&outcome)));
                let toast = toast.clone();
                Timeout::new(DISMISS_MS, move || toast.set(None)).forget();
            });
        })
    };

    let time = *time_left;
    let units = [
        (time.days, "Days"),
        (time.hours, "Hours"),
        (time.minutes, "Minutes"),
        (time.seconds, "Seconds"),
    ];

    html! {
        <div class="coming-soon">
            <style>
                {r#"
                    .coming-soon {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 3rem 1rem;
                        position: relative;
                        overflow: hidden;
                        background: #FAFAFA;
                        color: #1E293B;
                        font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
                        text-align: center;
                    }
                    .page-glow {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(182, 212, 232, 0.25), #FAFAFA 45%);
                        pointer-events: none;
                    }
                    .coming-soon main {
                        position: relative;
                        z-index: 1;
                        width: 100%;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .logo {
                        height: 4.5rem;
                        margin: 0 auto 3rem;
                        display: block;
                        animation: fade-in 1s ease-out forwards;
                    }
                    .hero {
                        animation: fade-in 1s ease-out 0.2s forwards;
                        opacity: 0;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 6vw, 4.25rem);
                        font-weight: 600;
                        line-height: 1.15;
                        letter-spacing: -0.02em;
                        margin: 0 0 1.5rem;
                    }
                    .hero .accent {
                        color: #5B8FB9;
                    }
                    .subtitle {
                        font-size: 1.15rem;
                        font-weight: 300;
                        color: #64748B;
                        max-width: 36rem;
                        margin: 0 auto;
                    }
                    .countdown-section {
                        padding: 3rem 0;
                        animation: fade-in 1s ease-out 0.4s forwards;
                        opacity: 0;
                    }
                    .countdown {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        max-width: 36rem;
                        margin: 0 auto;
                    }
                    .countdown-value {
                        font-size: clamp(2rem, 5vw, 3.25rem);
                        font-weight: 600;
                        color: #5B8FB9;
                        font-variant-numeric: tabular-nums;
                    }
                    .countdown-label {
                        font-size: 0.8rem;
                        font-weight: 300;
                        color: #64748B;
                        text-transform: uppercase;
                        letter-spacing: 0.12em;
                        margin-top: 0.5rem;
                    }
                    .live-banner {
                        animation: scale-in 0.5s ease-out forwards;
                    }
                    .live-banner .live-title {
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 600;
                        color: #5B8FB9;
                        margin-bottom: 1rem;
                    }
                    .live-banner p {
                        font-size: 1.1rem;
                        color: #64748B;
                        margin: 0;
                    }
                    .subscribe-form {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        max-width: 28rem;
                        margin: 0 auto;
                        animation: fade-in 1s ease-out 0.6s forwards;
                        opacity: 0;
                    }
                    .subscribe-form input {
                        flex: 1;
                        min-width: 14rem;
                        height: 3rem;
                        padding: 0 1.5rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(100, 116, 139, 0.3);
                        background: rgba(255, 255, 255, 0.6);
                        font-size: 1rem;
                        color: #1E293B;
                        outline: none;
                        transition: border-color 0.3s ease;
                    }
                    .subscribe-form input:focus {
                        border-color: #5B8FB9;
                    }
                    .subscribe-form button {
                        height: 3rem;
                        padding: 0 2rem;
                        border-radius: 9999px;
                        border: none;
                        background: #5B8FB9;
                        color: #FFFFFF;
                        font-size: 1rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .subscribe-form button:hover {
                        background: #4A7BA3;
                        transform: scale(1.05);
                    }
                    .socials {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        padding: 2.5rem 0 4rem;
                        animation: fade-in 1s ease-out 0.8s forwards;
                        opacity: 0;
                    }
                    .social-link {
                        color: #64748B;
                        transition: color 0.3s ease;
                        display: inline-flex;
                    }
                    .social-link:hover {
                        color: #5B8FB9;
                    }
                    .page-footer {
                        position: absolute;
                        bottom: 1.5rem;
                        left: 0;
                        right: 0;
                        z-index: 1;
                        font-size: 0.85rem;
                        font-weight: 300;
                        color: #64748B;
                        padding: 0 1rem;
                    }
                    .page-footer p {
                        margin: 0.25rem 0;
                    }
                    .page-footer a {
                        color: #5B8FB9;
                        text-decoration: none;
                    }
                    .page-footer a:hover {
                        text-decoration: underline;
                    }
                    @keyframes fade-in {
                        from { opacity: 0; transform: translateY(0.75rem); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes scale-in {
                        from { opacity: 0; transform: scale(0.92); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @media (max-width: 640px) {
                        .countdown { gap: 0.75rem; }
                        .socials { padding-bottom: 6rem; }
                    }
                "#}
            </style>
            <div class="page-glow"></div>
            <main>
                <img src="/assets/trendio-logo.svg" alt="Trendio" class="logo" />

                <div class="hero">
                    <h1>
                        {"A New Era of Minimal"}
                        <br />
                        <span class="accent">{"Luxury Fashion"}</span>
                    </h1>
                    <p class="subtitle">
                        {"Our website is launching soon. Be the first to experience it."}
                    </p>
                </div>

                <div class="countdown-section">
                    if time.launched {
                        <div class="live-banner">
                            <div class="live-title">{"We're Live!"}</div>
                            <p>{"Welcome to the new era of luxury fashion"}</p>
                        </div>
                    } else {
                        <div class="countdown">
                            {
                                units.iter().map(|(value, label)| html! {
                                    <div class="countdown-unit">
                                        <div class="countdown-value">{format!("{:02}", value)}</div>
                                        <div class="countdown-label">{*label}</div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    }
                </div>

                <form class="subscribe-form" onsubmit={onsubmit}>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        value={(*email).clone()}
                        oninput={oninput}
                    />
                    <button type="submit">{"Notify Me"}</button>
                </form>

                <div class="socials">
                    <a href="#" class="social-link" aria-label="Instagram">
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
                            <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
                            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                            <line x1="17.5" y1="6.5" x2="17.51" y2="6.5" />
                        </svg>
                    </a>
                    <a href="#" class="social-link" aria-label="Facebook">
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
                        </svg>
                    </a>
                    <a href="#" class="social-link" aria-label="Twitter">
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.1a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z" />
                        </svg>
                    </a>
                </div>
            </main>

            <footer class="page-footer">
                <p>
                    {"For enquiries: "}
                    <a href="mailto:support@trendio.world">{"support@trendio.world"}</a>
                </p>
                <p>{"© Trendio - 2025 All Rights Reserved"}</p>
            </footer>

            {
                if let Some(notice) = (*toast).clone() {
                    html! { <ToastView notice={notice} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
