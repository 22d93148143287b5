use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const PLACEHOLDER: &str = "Loading...";
const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Fetches the greeting from the backend. Any HTTP status counts as
/// success as long as the body reads as text.
async fn fetch_hello() -> Result<String, gloo_net::Error> {
    let resp = Request::get("/hello").send().await?;
    resp.text().await
}

/// Derives the text shown in place of the greeting when the request fails.
fn failure_text(err: impl std::fmt::Display) -> String {
    let msg = err.to_string();
    if msg.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        format!("Error: {msg}")
    }
}

#[function_component(App)]
fn app() -> Html {
    let message = use_state(|| PLACEHOLDER.to_string());

    // Fire the request once per mount.
    {
        let message = message.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let flag = alive.clone();
            spawn_local(async move {
                let text = match fetch_hello().await {
                    Ok(body) => body,
                    Err(err) => {
                        gloo::console::error!(format!("/hello request failed: {err}"));
                        failure_text(err)
                    }
                };
                // The page may have unmounted while the request was in flight.
                if flag.get() {
                    message.set(text);
                }
            });
            move || alive.set(false)
        });
    }

    html! {
        <main class="wrap">
            <h1 class="title">{ "Spring Boot says:" }</h1>
            <p class="message">{ (*message).clone() }</p>
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_text_prefixes_the_message() {
        assert_eq!(failure_text("Network down"), "Error: Network down");
    }

    #[test]
    fn failure_text_keeps_gloo_error_messages() {
        let err = gloo_net::Error::GlooError("Network down".to_string());
        assert_eq!(failure_text(err), "Error: Network down");
    }

    #[test]
    fn failure_text_falls_back_when_there_is_no_message() {
        assert_eq!(failure_text(""), UNKNOWN_ERROR);
        assert_eq!(failure_text("   "), UNKNOWN_ERROR);
    }

    // Effects never run server-side, so rendering to a string shows the
    // frame a browser paints before the request settles.
    #[tokio::test]
    async fn first_frame_shows_title_and_placeholder() {
        let html = yew::ServerRenderer::<App>::new().render().await;
        assert!(html.contains("Spring Boot says:"));
        assert!(html.contains(PLACEHOLDER));
    }
}
