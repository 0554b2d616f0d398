use yew::prelude::*;

use crate::subscribe::{Outcome, Reason};

/// How long a notice stays on screen.
pub const DISMISS_MS: u32 = 4_000;

/// One-line user notice for a subscription attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: &'static str,
    pub description: &'static str,
    pub destructive: bool,
}

impl Toast {
    pub fn for_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Accepted => Self {
                title: "Thank you!",
                description: "You'll be notified when we launch.",
                destructive: false,
            },
            Outcome::Rejected(Reason::Missing) => Self {
                title: "Email required",
                description: "Please enter your email address.",
                destructive: true,
            },
            Outcome::Rejected(Reason::Malformed) => Self {
                title: "Invalid email",
                description: "Please enter a valid email address.",
                destructive: true,
            },
            Outcome::Rejected(Reason::Duplicate) => Self {
                title: "Already subscribed",
                description: "This email is already on our list.",
                destructive: true,
            },
            Outcome::Rejected(Reason::Unknown) => Self {
                title: "Error",
                description: "Something went wrong. Please try again.",
                destructive: true,
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Toast,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastProps) -> Html {
    let class = if props.notice.destructive {
        "toast toast-destructive"
    } else {
        "toast"
    };

    html! {
        <div class={class} role="status">
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        width: 320px;
                        max-width: calc(100vw - 3rem);
                        background: #FFFFFF;
                        border: 1px solid rgba(91, 143, 185, 0.25);
                        border-radius: 12px;
                        padding: 1rem 1.25rem;
                        box-shadow: 0 8px 24px rgba(30, 41, 59, 0.15);
                        animation: toast-slide-in 0.3s ease-out forwards;
                        z-index: 50;
                        text-align: left;
                    }
                    .toast-destructive {
                        border-color: rgba(220, 38, 38, 0.35);
                    }
                    .toast-destructive .toast-title {
                        color: #DC2626;
                    }
                    .toast-title {
                        font-weight: 600;
                        font-size: 0.95rem;
                        color: #1E293B;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.85rem;
                        color: #64748B;
                    }
                    @keyframes toast-slide-in {
                        from { transform: translateY(1rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <div class="toast-title">{props.notice.title}</div>
            <div class="toast-description">{props.notice.description}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_matches_every_outcome() {
        let cases = [
            (
                Outcome::Rejected(Reason::Missing),
                "Email required",
                "Please enter your email address.",
            ),
            (
                Outcome::Rejected(Reason::Malformed),
                "Invalid email",
                "Please enter a valid email address.",
            ),
            (
                Outcome::Rejected(Reason::Duplicate),
                "Already subscribed",
                "This email is already on our list.",
            ),
            (
                Outcome::Rejected(Reason::Unknown),
                "Error",
                "Something went wrong. Please try again.",
            ),
            (
                Outcome::Accepted,
                "Thank you!",
                "You'll be notified when we launch.",
            ),
        ];
        for (outcome, title, description) in cases {
            let toast = Toast::for_outcome(&outcome);
            assert_eq!(toast.title, title);
            assert_eq!(toast.description, description);
        }
    }

    #[test]
    fn only_success_reads_as_non_destructive() {
        assert!(!Toast::for_outcome(&Outcome::Accepted).destructive);
        for reason in [
            Reason::Missing,
            Reason::Malformed,
            Reason::Duplicate,
            Reason::Unknown,
        ] {
            assert!(Toast::for_outcome(&Outcome::Rejected(reason)).destructive);
        }
    }
}
