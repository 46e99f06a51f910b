use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::document::eval;
use dioxus::prelude::*;
use werkstatt_core::preview::{PreviewSurface, RenderPlan, SurfaceReport};

static NEXT_HOST: AtomicU64 = AtomicU64::new(1);

/// Renders `html` styled only by `css` inside its own shadow root.
///
/// Every change rewrites the whole surface. If the webview refuses a shadow
/// root the content is written into the host element instead.
#[component]
pub fn ShadowPreview(html: String, css: String) -> Element {
    let host_id = use_hook(|| format!("preview-host-{}", NEXT_HOST.fetch_add(1, Ordering::Relaxed)));
    let surface = use_signal(PreviewSurface::new);

    use_effect(use_reactive((&html, &css), {
        let host_id = host_id.clone();
        move |(html, css)| {
            let mut surface = surface;
            let plan = surface.write().plan(&html, &css);
            let script = render_script(&host_id, &plan);
            spawn(async move {
                match eval(&script).join::<String>().await {
                    Ok(status) => surface.write().confirm(SurfaceReport::parse(&status)),
                    Err(err) => tracing::debug!(?err, "preview surface did not report"),
                }
            });
        }
    }));

    rsx! {
        div {
            id: "{host_id}",
            class: "shadow-host",
            "data-testid": "shadow-host",
        }
    }
}

const RENDER_SCRIPT_TEMPLATE: &str = r#"
    const host = document.getElementById({host_id});
    if (!host) { return "degraded:host element missing"; }
    const markup = {markup};
    if ({isolate}) {
        try {
            const root = host.shadowRoot || host.attachShadow({ mode: "open" });
            root.innerHTML = markup;
            return "isolated";
        } catch (err) {
            host.innerHTML = markup;
            return "degraded:" + String(err);
        }
    }
    if (host.shadowRoot) {
        host.shadowRoot.innerHTML = markup;
    } else {
        host.innerHTML = markup;
    }
    return "degraded";
"#;

fn render_script(host_id: &str, plan: &RenderPlan) -> String {
    RENDER_SCRIPT_TEMPLATE
        .replace("{host_id}", &js_string_literal(host_id))
        .replace("{isolate}", if plan.isolate { "true" } else { "false" })
        .replace("{markup}", &js_string_literal(&plan.markup))
}

fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
