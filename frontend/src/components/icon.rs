use serde::Deserialize;
use yew::prelude::*;

/// Glyphs used on the page, named as in `content/site.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Truck,
    Train,
    Ship,
    Clock,
    Shield,
    Globe,
    CheckCircle,
    MapPin,
    Phone,
    Mail,
    ArrowRight,
    Menu,
    X,
}

impl Icon {
    pub fn label(self) -> &'static str {
        match self {
            Icon::Truck => "truck",
            Icon::Train => "train",
            Icon::Ship => "ship",
            Icon::Clock => "clock",
            Icon::Shield => "shield",
            Icon::Globe => "globe",
            Icon::CheckCircle => "check circle",
            Icon::MapPin => "map pin",
            Icon::Phone => "phone",
            Icon::Mail => "mail",
            Icon::ArrowRight => "arrow right",
            Icon::Menu => "open menu",
            Icon::X => "close menu",
        }
    }

    fn strokes(self) -> Html {
        match self {
            Icon::Truck => html! {
                <>
                    <path d="M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2" />
                    <path d="M15 18H9" />
                    <path d="M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14" />
                    <circle cx="17" cy="18" r="2" />
                    <circle cx="7" cy="18" r="2" />
                </>
            },
            Icon::Train => html! {
                <>
                    <path d="M8 3.1V7a4 4 0 0 0 8 0V3.1" />
                    <path d="m9 15-1-1" />
                    <path d="m15 15 1-1" />
                    <path d="M9 19c-2.8 0-5-2.2-5-5v-4a8 8 0 0 1 16 0v4c0 2.8-2.2 5-5 5Z" />
                    <path d="m8 19-2 3" />
                    <path d="m16 19 2 3" />
                </>
            },
            Icon::Ship => html! {
                <>
                    <path d="M2 21c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1 .6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1" />
                    <path d="M19.38 20A11.6 11.6 0 0 0 21 14l-9-4-9 4c0 2.9.94 5.34 2.81 7.76" />
                    <path d="M19 13V7a2 2 0 0 0-2-2H7a2 2 0 0 0-2 2v6" />
                    <path d="M12 10v4" />
                    <path d="M12 2v3" />
                </>
            },
            Icon::Clock => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <polyline points="12 6 12 12 16 14" />
                </>
            },
            Icon::Shield => html! {
                <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
            },
            Icon::Globe => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" />
                    <path d="M2 12h20" />
                </>
            },
            Icon::CheckCircle => html! {
                <>
                    <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                    <path d="m9 11 3 3L22 4" />
                </>
            },
            Icon::MapPin => html! {
                <>
                    <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                    <circle cx="12" cy="10" r="3" />
                </>
            },
            Icon::Phone => html! {
                <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
            },
            Icon::Mail => html! {
                <>
                    <rect width="20" height="16" x="2" y="4" rx="2" />
                    <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
                </>
            },
            Icon::ArrowRight => html! {
                <>
                    <path d="M5 12h14" />
                    <path d="m12 5 7 7-7 7" />
                </>
            },
            Icon::Menu => html! {
                <>
                    <line x1="4" x2="20" y1="6" y2="6" />
                    <line x1="4" x2="20" y1="12" y2="12" />
                    <line x1="4" x2="20" y1="18" y2="18" />
                </>
            },
            Icon::X => html! {
                <>
                    <path d="M18 6 6 18" />
                    <path d="m6 6 12 12" />
                </>
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
    /// Stroke color; inherits the text color when unset.
    #[prop_or_default]
    pub color: Option<AttrValue>,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    let style = props
        .color
        .as_ref()
        .map(|color| format!("color: {};", color));

    html! {
        <svg
            class={classes!("glyph", props.class.clone())}
            style={style}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-label={props.icon.label()}
        >
            { props.icon.strokes() }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        icon: Icon,
    }

    #[test]
    fn test_deserializes_kebab_case_names() {
        let parsed: Holder = serde_json::from_str(r#"{"icon":"check-circle"}"#).unwrap();
        assert_eq!(parsed.icon, Icon::CheckCircle);
        let parsed: Holder = serde_json::from_str(r#"{"icon":"x"}"#).unwrap();
        assert_eq!(parsed.icon, Icon::X);
    }

    #[test]
    fn test_rejects_unknown_name() {
        assert!(serde_json::from_str::<Holder>(r#"{"icon":"CheckCircle"}"#).is_err());
    }
}
