/*
 * The primary interface to the platform layer: it owns the tao event loop and
 * the single native-window slot, translates native events (window close,
 * reactivation, menu selections, webview messages) into `AppEvent`s, and
 * drains the application logic's command queue after each dispatched event.
 *
 * Everything runs on the one UI thread. Dialog commands block the initiating
 * flow inside `command_executor::execute` and hand their completion event
 * straight back into the dispatch loop, which guarantees that renderer
 * notifications are only ever delivered after the native call that produced
 * them has finished.
 */

use super::command_executor;
use super::controls::menu_handler::MenuRegistry;
use super::types::{AppEvent, Platform, PlatformEventHandler, WindowId};
use super::window_common::MainWindowData;
use crate::ipc::RendererRequest;

use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Events marshalled onto the loop thread from webview and menu callbacks.
#[derive(Debug)]
pub(crate) enum UserEvent {
    RendererRequest {
        window_id: WindowId,
        request: RendererRequest,
    },
    ContentReady {
        window_id: WindowId,
    },
    MenuSelected(muda::MenuId),
}

/// Mutable platform-side state, touched only from the loop thread.
pub(crate) struct PlatformState {
    pub(crate) proxy: EventLoopProxy<UserEvent>,
    pub(crate) main_window: Option<MainWindowData>,
    pub(crate) menu: MenuRegistry,
    pub(crate) exit_requested: bool,
    next_window_id: usize,
}

impl PlatformState {
    pub(crate) fn generate_window_id(&mut self) -> WindowId {
        let id = self.next_window_id;
        self.next_window_id += 1;
        WindowId(id)
    }
}

pub struct PlatformInterface {
    event_loop: EventLoop<UserEvent>,
    state: PlatformState,
    platform: Platform,
}

impl PlatformInterface {
    pub fn new(platform: Platform) -> Self {
        let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
        let proxy = event_loop.create_proxy();

        // Menu selections arrive on muda's own channel; forward them onto the
        // loop so they are handled in order with everything else.
        let menu_proxy = proxy.clone();
        std::thread::spawn(move || {
            let receiver = muda::MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if menu_proxy
                    .send_event(UserEvent::MenuSelected(event.id().clone()))
                    .is_err()
                {
                    break;
                }
            }
        });

        PlatformInterface {
            event_loop,
            state: PlatformState {
                proxy,
                main_window: None,
                menu: MenuRegistry::new(),
                exit_requested: false,
                next_window_id: 1,
            },
            platform,
        }
    }

    /// Runs the event loop until the application terminates. Never returns;
    /// the process exits when the loop stops.
    pub fn run(self, handler: Arc<Mutex<dyn PlatformEventHandler>>) -> ! {
        let PlatformInterface {
            event_loop,
            mut state,
            platform,
        } = self;

        event_loop.run(move |event, target, control_flow| {
            *control_flow = ControlFlow::Wait;

            match event {
                Event::NewEvents(StartCause::Init) => {
                    dispatch(&mut state, target, &handler, AppEvent::ApplicationReady);
                }

                Event::WindowEvent {
                    window_id,
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    let is_main = state
                        .main_window
                        .as_ref()
                        .map(|w| w.window.id() == window_id)
                        .unwrap_or(false);
                    if is_main {
                        // Drop the native resources first, then tell the app
                        // logic the handle is gone.
                        let data = state.main_window.take();
                        let id = data.map(|w| w.id);
                        if let Some(id) = id {
                            log::info!("Platform: Main window {:?} closed by user.", id);
                            dispatch(
                                &mut state,
                                target,
                                &handler,
                                AppEvent::WindowDestroyed { window_id: id },
                            );
                        }
                    }
                }

                Event::Reopen {
                    has_visible_windows,
                    ..
                } => {
                    if platform == Platform::MacOs
                        && !has_visible_windows
                        && state.main_window.is_none()
                    {
                        dispatch(&mut state, target, &handler, AppEvent::ApplicationReactivated);
                    }
                }

                Event::UserEvent(UserEvent::ContentReady { window_id }) => {
                    dispatch(
                        &mut state,
                        target,
                        &handler,
                        AppEvent::WindowContentReady { window_id },
                    );
                }

                Event::UserEvent(UserEvent::RendererRequest { window_id, request }) => {
                    dispatch(
                        &mut state,
                        target,
                        &handler,
                        AppEvent::RendererRequestReceived { window_id, request },
                    );
                }

                Event::UserEvent(UserEvent::MenuSelected(menu_id)) => {
                    if let Some(action) = state.menu.action_for(&menu_id) {
                        dispatch(
                            &mut state,
                            target,
                            &handler,
                            AppEvent::MenuActionClicked { action },
                        );
                    }
                    // Unknown ids belong to native-role items handled by the
                    // toolkit itself.
                }

                Event::LoopDestroyed => {
                    if let Ok(mut guard) = handler.lock() {
                        guard.on_quit();
                    }
                }

                _ => {}
            }

            if state.exit_requested {
                *control_flow = ControlFlow::Exit;
            }
        })
    }
}

/*
 * Delivers one event to the application logic, then executes every command it
 * enqueued. Commands that complete with a follow-up event (window creation,
 * dialog results) are queued behind the current batch and dispatched the same
 * way, so notification ordering follows command completion ordering.
 */
fn dispatch(
    state: &mut PlatformState,
    target: &tao::event_loop::EventLoopWindowTarget<UserEvent>,
    handler: &Arc<Mutex<dyn PlatformEventHandler>>,
    event: AppEvent,
) {
    let mut pending = VecDeque::new();
    pending.push_back(event);

    while let Some(event) = pending.pop_front() {
        log::debug!("Platform: Dispatching {:?}.", event);
        match handler.lock() {
            Ok(mut guard) => guard.handle_event(event),
            Err(_) => {
                log::error!("Platform: Event handler mutex poisoned, dropping event.");
                return;
            }
        }

        loop {
            let command = match handler.lock() {
                Ok(mut guard) => guard.try_dequeue_command(),
                Err(_) => None,
            };
            let Some(command) = command else { break };
            match command_executor::execute(state, target, command) {
                Ok(Some(follow_up)) => pending.push_back(follow_up),
                Ok(None) => {}
                Err(e) => log::error!("Platform: Error executing command: {}", e),
            }
        }
    }
}
