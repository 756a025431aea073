/*
 * Construction and handling of the single native main window and its
 * embedded webview. The window is created hidden, sized to the primary
 * display, and loads the fixed renderer build artifact; it becomes visible
 * only when the application logic issues `ShowWindow` after the content
 * reports ready. Renderer IPC messages and the page-load signal are
 * marshalled onto the event loop as user events.
 */

use super::app::UserEvent;
use super::error::Result as PlatformResult;
use super::types::{WindowConfig, WindowId};
use crate::ipc::{self, RendererRequest};

use tao::dpi::{LogicalSize, PhysicalSize};
use tao::event_loop::{EventLoopProxy, EventLoopWindowTarget};
use tao::window::WindowBuilder;
use wry::{PageLoadEvent, WebViewBuilder};

// Fallback when the primary monitor cannot be queried.
const FALLBACK_WINDOW_SIZE: (u32, u32) = (1280, 800);

/// Native resources of the live main window. At most one of these exists
/// process-wide, held in the platform state's window slot.
pub(crate) struct MainWindowData {
    pub(crate) id: WindowId,
    pub(crate) window: tao::window::Window,
    pub(crate) webview: wry::WebView,
    shown: bool,
}

impl MainWindowData {
    /// Makes the window visible. Idempotent; the single logical show
    /// transition is enforced by the application logic.
    pub(crate) fn show(&mut self) {
        if !self.shown {
            log::debug!("Platform: Showing main window {:?}.", self.id);
            self.window.set_visible(true);
            self.shown = true;
        }
    }
}

pub(crate) fn create_main_window(
    target: &EventLoopWindowTarget<UserEvent>,
    proxy: &EventLoopProxy<UserEvent>,
    window_id: WindowId,
    config: &WindowConfig,
) -> PlatformResult<MainWindowData> {
    let initial_size = target
        .primary_monitor()
        .map(|monitor| monitor.size())
        .unwrap_or_else(|| PhysicalSize::new(FALLBACK_WINDOW_SIZE.0, FALLBACK_WINDOW_SIZE.1));

    #[allow(unused_mut)]
    let mut builder = WindowBuilder::new()
        .with_title(&config.title)
        .with_visible(false)
        .with_inner_size(initial_size)
        .with_min_inner_size(LogicalSize::new(
            config.min_width as f64,
            config.min_height as f64,
        ));

    #[cfg(target_os = "macos")]
    {
        use tao::platform::macos::WindowBuilderExtMacOS;
        builder = builder.with_titlebar_hidden(true);
    }

    let window = builder.build(target)?;

    let ipc_proxy = proxy.clone();
    let load_proxy = proxy.clone();
    let webview = WebViewBuilder::new()
        .with_url(&config.content_url)
        .with_initialization_script(ipc::RENDERER_BOOTSTRAP_JS)
        .with_background_color(config.background_color)
        .with_devtools(config.devtools)
        .with_ipc_handler(move |message| {
            match RendererRequest::parse(message.body()) {
                Ok(request) => {
                    let _ = ipc_proxy.send_event(UserEvent::RendererRequest { window_id, request });
                }
                // Bad messages are dropped at the boundary; the channel is
                // fire-and-forget, so there is no error to report back.
                Err(e) => log::warn!("Platform: Dropping renderer message: {}", e),
            }
        })
        .with_on_page_load_handler(move |event, url| {
            if matches!(event, PageLoadEvent::Finished) {
                log::debug!("Platform: Window content loaded from {}.", url);
                let _ = load_proxy.send_event(UserEvent::ContentReady { window_id });
            }
        })
        .build(&window)?;

    if let Err(e) = webview.zoom(config.initial_zoom) {
        log::warn!("Platform: Failed to apply initial zoom: {}", e);
    }

    log::info!(
        "Platform: Main window {:?} created hidden at {}x{}, loading {}.",
        window_id,
        initial_size.width,
        initial_size.height,
        config.content_url
    );

    Ok(MainWindowData {
        id: window_id,
        window,
        webview,
        shown: false,
    })
}
