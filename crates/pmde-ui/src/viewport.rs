//! Window scroll, size and pointer tracking.
//!
//! Small scripts register listeners on the window and stream the values
//! back through the renderer's eval channel. Each hook call owns its own
//! listeners; dropping the component tells the script to unregister them.

use dioxus::prelude::*;
use pmde_core::Point;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const VIEWPORT_SCRIPT: &str = r#"
    const post = () => dioxus.send({ scrollY: window.scrollY, height: window.innerHeight });
    window.addEventListener("scroll", post, { passive: true });
    window.addEventListener("resize", post);
    post();
    await dioxus.recv();
    window.removeEventListener("scroll", post);
    window.removeEventListener("resize", post);
"#;

const POINTER_SCRIPT: &str = r#"
    const post = (e) => dioxus.send({ clientX: e.clientX, clientY: e.clientY });
    window.addEventListener("mousemove", post, { passive: true });
    await dioxus.recv();
    window.removeEventListener("mousemove", post);
"#;

/// Current window scroll offset and height in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub scroll_y: f64,
    /// `None` until the first report arrives
    #[serde(default)]
    pub height: Option<f64>,
}

impl Viewport {
    pub fn height_or(&self, fallback: f64) -> f64 {
        self.height.filter(|h| *h > 0.0).unwrap_or(fallback)
    }
}

/// Pointer position relative to the window's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClientPoint {
    client_x: f64,
    client_y: f64,
}

impl From<ClientPoint> for Point {
    fn from(at: ClientPoint) -> Self {
        Point::new(at.client_x, at.client_y)
    }
}

/// Run `script` for the component's lifetime, feeding each report to `on_report`.
fn use_window_bridge<T>(script: &'static str, mut on_report: impl FnMut(T) + 'static)
where
    T: DeserializeOwned + 'static,
{
    let bridge = use_hook(move || {
        let eval = document::eval(script);
        let mut reports = eval.clone();
        spawn(async move {
            loop {
                match reports.recv::<T>().await {
                    Ok(report) => on_report(report),
                    Err(err) => {
                        tracing::debug!(error = ?err, "window listener closed");
                        break;
                    }
                }
            }
        });
        eval
    });

    use_drop(move || {
        // Unblocks the script's `dioxus.recv()` so it removes its listeners
        if let Err(err) = bridge.send(true) {
            tracing::trace!(error = ?err, "window script already gone");
        }
    });
}

/// Subscribe to window scroll and resize events.
pub fn use_viewport() -> Signal<Viewport> {
    let mut viewport = use_signal(Viewport::default);
    use_window_bridge(VIEWPORT_SCRIPT, move |next: Viewport| {
        if *viewport.peek() != next {
            viewport.set(next);
        }
    });
    viewport
}

/// Track the pointer anywhere in the window, in client coordinates.
///
/// `None` until the pointer first moves.
pub fn use_window_pointer() -> Signal<Option<Point>> {
    let mut pointer = use_signal(|| None::<Point>);
    use_window_bridge(POINTER_SCRIPT, move |at: ClientPoint| {
        pointer.set(Some(at.into()));
    });
    pointer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_script_report() {
        let report: Viewport = serde_json::from_str(r#"{"scrollY": 120.5, "height": 900}"#).unwrap();
        assert_eq!(report.scroll_y, 120.5);
        assert_eq!(report.height, Some(900.0));
    }

    #[test]
    fn unmeasured_height_uses_fallback() {
        let viewport = Viewport::default();
        assert_eq!(viewport.height_or(800.0), 800.0);
        let zero = Viewport { scroll_y: 0.0, height: Some(0.0) };
        assert_eq!(zero.height_or(800.0), 800.0);
    }

    #[test]
    fn parses_pointer_report() {
        let report: ClientPoint = serde_json::from_str(r#"{"clientX": 640, "clientY": 12.5}"#).unwrap();
        assert_eq!(Point::from(report), Point::new(640.0, 12.5));
    }
}
