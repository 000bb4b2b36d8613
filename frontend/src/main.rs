use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod error;
mod hooks;
mod motion {
    pub mod interpolate;
    pub mod menu;
    pub mod reveal;
    pub mod scroll_header;
    pub mod signals;
}
mod components {
    pub mod animated_section;
    pub mod header;
    pub mod icon;
}
mod pages {
    pub mod landing;
}

use content::SiteContent;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing content={props.content.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::load() {
        Ok(content) => {
            info!(
                "Loaded site content: {} services, {} benefits, {} offices",
                content.services.len(),
                content.benefits.len(),
                content.contact.offices.len()
            );
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(e) => error!("Not rendering page: {}", e),
    }
}
