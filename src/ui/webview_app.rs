//! WebView shell using `wry` + `tao`.
//!
//! Architecture:
//! - The main window wraps the single remote web app (`home_url`).
//! - `with_initialization_script(FAB_JS)` injects a floating Downloads
//!   button and a toast helper on every http/https page.
//! - The downloads screen is an internal page served via the `dx://`
//!   custom protocol, rebuilt from the folder listing on each load.
//! - Page-initiated downloads are denied to the webview and enqueued on
//!   the in-process provider; the watcher then polls on the event loop
//!   via `ControlFlow::WaitUntil` every 500 ms and pushes progress into
//!   the page with `evaluate_script`.
//! - IPC from JS → Rust via `window.ipc.postMessage()`.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{info, warn};
use wry::WebViewBuilder;

use crate::app::App;
use crate::managers::download_watcher::{DownloadWatcherTrait, PollOutcome, POLL_INTERVAL};
use crate::managers::file_list_manager::FileListManagerTrait;
use crate::services::download_provider::{guess_file_name, DownloadProvider};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::theme_engine::ThemeEngineTrait;
use crate::types::download::DownloadRequest;
use crate::types::errors::ListingError;

const SHELL_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) DarkElixir/0.2";

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    /// A page-initiated download was enqueued; start watching it.
    DownloadStarted { handle: String, file_name: String },
}

struct ShellState {
    app: App,
    /// When the next watcher poll is due; `None` while nothing is tracked.
    next_poll: Option<Instant>,
}

/// Injected on every remote page: a floating button that opens the
/// downloads screen, plus a small toast helper.
const FAB_JS: &str = r#"
(function(){
  if (location.protocol !== 'http:' && location.protocol !== 'https:') return;
  if (window.__dx_fab) return;
  window.__dx_fab = true;
  function post(msg){ if(window.ipc) window.ipc.postMessage(JSON.stringify(msg)); }
  window.__dx_toast = function(text){
    var t = document.createElement('div');
    t.textContent = text;
    t.style.cssText = 'position:fixed;bottom:90px;left:50%;transform:translateX(-50%);background:rgba(0,0,0,0.8);color:#fff;padding:8px 16px;border-radius:16px;font:13px sans-serif;z-index:99999';
    document.body.appendChild(t);
    setTimeout(function(){ t.remove(); }, 2500);
  };
  function mount(){
    var b = document.createElement('button');
    b.textContent = '⬇';
    b.title = 'Downloads';
    b.style.cssText = 'position:fixed;bottom:24px;right:24px;width:48px;height:48px;border-radius:50%;border:none;background:#2196f3;color:#fff;font-size:20px;cursor:pointer;box-shadow:0 2px 8px rgba(0,0,0,0.4);z-index:99999';
    b.addEventListener('click', function(){ post({cmd:'open_downloads'}); });
    document.body.appendChild(b);
  }
  if (document.body) mount(); else document.addEventListener('DOMContentLoaded', mount);
})();
"#;

const DOWNLOADS_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Helvetica,Arial,sans-serif;background:var(--bg-primary);color:var(--text-primary);min-height:100vh;user-select:none}
.topbar{display:flex;align-items:center;justify-content:space-between;padding:12px 16px;border-bottom:1px solid var(--border-color)}
.topbar .title{font-size:16px;font-weight:600}
.btn{border:1px solid var(--border-color);background:var(--bg-row);color:var(--text-primary);padding:6px 12px;border-radius:6px;cursor:pointer;font-size:13px}
.btn:hover{border-color:var(--accent-color)}
.notice{margin:12px 16px;padding:10px 12px;border:1px solid var(--border-color);border-radius:6px;color:var(--text-secondary);font-size:13px}
.file-list{padding:8px 16px}
.file-row{display:flex;align-items:center;gap:12px;padding:12px;margin-bottom:8px;background:var(--bg-row);border:1px solid var(--border-color);border-radius:8px}
.file-main{flex:1;min-width:0}
.file-name{font-size:14px;font-weight:500;overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.file-meta{font-size:12px;color:var(--text-secondary);margin-top:2px}
.file-status{width:160px;text-align:right}
.status{font-size:12px;font-weight:600}
.status.downloading{color:var(--status-active)}
.status.done{color:var(--status-done)}
.bar{height:4px;background:var(--progress-track);border-radius:2px;margin-top:6px;overflow:hidden}
.fill{height:100%;background:var(--accent-color);width:0%}
.delete{border:none;background:none;color:var(--text-secondary);font-size:16px;cursor:pointer;padding:4px 8px}
.delete:hover{color:var(--status-active)}
.empty{padding:48px 16px;text-align:center;color:var(--text-secondary);font-size:14px}
"#;

const DOWNLOADS_JS: &str = r#"
function post(msg){ if(window.ipc) window.ipc.postMessage(JSON.stringify(msg)); }
document.getElementById('dx-back').addEventListener('click',function(){ post({cmd:'back_home'}); });
document.getElementById('dx-refresh').addEventListener('click',function(){ post({cmd:'refresh_list'}); });
document.getElementById('dx-theme').addEventListener('click',function(){ post({cmd:'toggle_theme'}); });
document.querySelectorAll('.delete').forEach(function(b){
  b.addEventListener('click',function(){ post({cmd:'delete_file', path:b.dataset.path}); });
});
window.__dx_progress = function(p){
  var row = document.getElementById('dx-active');
  if(!row) return;
  var fill = row.querySelector('.fill');
  var label = row.querySelector('.status');
  if(p.state === 'Active'){
    if(fill) fill.style.width = p.percent + '%';
  } else {
    if(fill) fill.parentElement.style.display = 'none';
    if(label){ label.textContent = 'Done'; label.classList.remove('downloading'); label.classList.add('done'); }
  }
};
"#;

fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Builds the internal downloads page from a fresh folder snapshot.
fn downloads_html(state: &mut ShellState) -> String {
    let listing_error = match state.app.file_list.refresh() {
        Ok(_) => None,
        Err(ListingError::FolderUnavailable(msg)) => Some(msg),
        Err(e) => Some(e.to_string()),
    };

    let mut rows = String::new();
    for entry in state.app.file_list.entries() {
        let tracked = state.app.watcher.is_tracking(&entry.path);
        let path_attr = html_escape(&entry.path.to_string_lossy());

        let status = if tracked {
            format!(
                "<div class=\"status downloading\">Downloading...</div>\
                 <div class=\"bar\"><div class=\"fill\" style=\"width:{}%\"></div></div>",
                state.app.watcher.percent()
            )
        } else {
            "<div class=\"status done\">Done</div>".to_string()
        };

        rows.push_str(&format!(
            "<div class=\"file-row\"{id} data-path=\"{path}\">\
             <div class=\"file-main\">\
             <div class=\"file-name\">{name}</div>\
             <div class=\"file-meta\">{size} \u{00b7} {date} \u{00b7} {kind}</div>\
             </div>\
             <div class=\"file-status\">{status}</div>\
             <button class=\"delete\" data-path=\"{path}\" title=\"Delete\">\u{2715}</button>\
             </div>",
            id = if tracked { " id=\"dx-active\"" } else { "" },
            path = path_attr,
            name = html_escape(&entry.name),
            size = entry.formatted_size(),
            date = entry.formatted_date(),
            kind = entry.type_label(),
            status = status,
        ));
    }

    let body = if rows.is_empty() {
        "<div class=\"empty\">No downloads yet</div>".to_string()
    } else {
        format!("<div class=\"file-list\">{}</div>", rows)
    };

    let notice = listing_error
        .map(|msg| format!("<div class=\"notice\">{}</div>", html_escape(&msg)))
        .unwrap_or_default();

    let root_vars: String = state
        .app
        .theme_engine
        .get_css_variables()
        .iter()
        .map(|(k, v)| format!("{}:{};", k, v))
        .collect();

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>:root{{{vars}}}{css}</style></head>\
         <body>\
         <div class=\"topbar\">\
         <button class=\"btn\" id=\"dx-back\">\u{2190} Back</button>\
         <div class=\"title\">Downloads</div>\
         <div>\
         <button class=\"btn\" id=\"dx-refresh\">Refresh</button>\
         <button class=\"btn\" id=\"dx-theme\">Theme</button>\
         </div>\
         </div>\
         {notice}{body}\
         <script>{js}</script>\
         </body></html>",
        vars = root_vars,
        css = DOWNLOADS_CSS,
        notice = notice,
        body = body,
        js = DOWNLOADS_JS,
    )
}

// ─── IPC handler ───

fn handle_ipc(state: &mut ShellState, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "open_downloads" | "refresh_list" => {
            Some(UserEvent::LoadUrl("dx://localhost/downloads".to_string()))
        }

        "back_home" => {
            let url = state.app.settings_engine.get_settings().general.home_url.clone();
            Some(UserEvent::LoadUrl(url))
        }

        "delete_file" => {
            if let Some(path) = msg.get("path").and_then(|v| v.as_str()) {
                if let Err(e) = state.app.file_list.remove_entry(std::path::Path::new(path)) {
                    warn!(path, error = %e, "delete failed");
                }
            }
            Some(UserEvent::LoadUrl("dx://localhost/downloads".to_string()))
        }

        "toggle_theme" => {
            let mode = state.app.theme_engine.toggle();
            let _ = state
                .app
                .settings_engine
                .set_value("appearance.theme", serde_json::json!(mode));
            Some(UserEvent::LoadUrl("dx://localhost/downloads".to_string()))
        }

        _ => None,
    }
}

/// Builds the progress push for the downloads page after one poll.
fn progress_script(state: &ShellState) -> String {
    let snapshot = state.app.watcher.snapshot();
    let payload = serde_json::json!({
        "state": snapshot.state,
        "percent": snapshot.percent(),
    });
    format!("if(window.__dx_progress)__dx_progress({})", payload)
}

// ─── Main entry point ───

pub fn run() {
    let app = App::new(None).expect("Failed to initialize Dark Elixir");
    let state = Arc::new(Mutex::new(ShellState {
        app,
        next_poll: None,
    }));

    let home_url = {
        let mut s = state.lock().unwrap();
        s.app.startup();
        s.app.settings_engine.get_settings().general.home_url.clone()
    };

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Dark Elixir")
        .with_inner_size(tao::dpi::LogicalSize::new(1100.0, 760.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let protocol_state = state.clone();
    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let dl_state = state.clone();
    let dl_proxy = proxy.clone();
    let nw_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("dx".into(), move |_wv_id, _request| {
            // Single internal page; any dx:// path serves the downloads screen.
            let html = {
                let mut s = protocol_state.lock().unwrap();
                downloads_html(&mut s)
            };
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap()
        })
        .with_initialization_script(FAB_JS)
        .with_user_agent(SHELL_USER_AGENT)
        .with_url(&home_url)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let mut s = ipc_state.lock().unwrap();
            if let Some(event) = handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_download_started_handler(move |url: String, _dest: &mut std::path::PathBuf| {
            let mut s = dl_state.lock().unwrap();
            let file_name = guess_file_name(&url, None, None);
            let request = DownloadRequest {
                url: url.clone(),
                file_name: file_name.clone(),
                destination_dir: s.app.downloads_dir.clone(),
                user_agent: Some(SHELL_USER_AGENT.to_string()),
                mime_type: None,
            };
            match s.app.provider.enqueue(request) {
                Ok(handle) => {
                    let _ = dl_proxy.send_event(UserEvent::DownloadStarted { handle, file_name });
                }
                Err(e) => warn!(url = %url, error = %e, "enqueue failed"),
            }
            // The provider owns the transfer; the webview never downloads.
            false
        })
        .with_new_window_req_handler(move |url, _features| {
            if url.starts_with("http://") || url.starts_with("https://") {
                let _ = nw_proxy.send_event(UserEvent::LoadUrl(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                let mut s = state.lock().unwrap();
                s.app.shutdown();
                s.next_poll = None;
                *control_flow = ControlFlow::Exit;
                return;
            }

            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                let mut s = state.lock().unwrap();
                let outcome = s.app.watcher.poll();
                let script = progress_script(&s);
                s.next_poll = match outcome {
                    PollOutcome::Reschedule => Some(Instant::now() + POLL_INTERVAL),
                    PollOutcome::Stopped => None,
                };
                drop(s);
                let _ = webview.evaluate_script(&script);
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    let _ = webview.load_url(&url);
                }
                UserEvent::DownloadStarted { handle, file_name } => {
                    info!(handle = %handle, file = %file_name, "download started");
                    let mut s = state.lock().unwrap();
                    if s.app.watcher.start(&handle).is_ok() {
                        // First poll is due immediately.
                        s.next_poll = Some(Instant::now());
                    }
                    drop(s);
                    let _ = webview.evaluate_script(&format!(
                        "if(window.__dx_toast)__dx_toast({})",
                        serde_json::json!(format!("Downloading: {}", file_name))
                    ));
                }
            },

            _ => {}
        }

        let s = state.lock().unwrap();
        *control_flow = match s.next_poll {
            Some(at) => ControlFlow::WaitUntil(at),
            None => ControlFlow::Wait,
        };
    });
}
