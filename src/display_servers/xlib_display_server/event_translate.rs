//! Translates raw Xlib events into [`DisplayEvent`]s. Events the window
//! manager has no use for translate to `None` or `Unknown`.
use super::XWrap;
use crate::command::Command;
use crate::display_event::DisplayEvent;
use crate::models::WindowHandle;
use crate::utils::modmask_lookup;
use x11_dl::xlib;

pub struct XEvent<'a>(pub &'a mut XWrap, pub xlib::XEvent);

impl<'a> From<XEvent<'a>> for Option<DisplayEvent> {
    fn from(x_event: XEvent) -> Self {
        let xw = x_event.0;
        let raw_event = x_event.1;

        match raw_event.get_type() {
            // New window wants to be mapped.
            xlib::MapRequest => from_map_request(raw_event, xw),

            // Window is gone. An unmap alone is not: switching
            // workspaces unmaps windows we still manage.
            xlib::DestroyNotify => {
                let event = xlib::XDestroyWindowEvent::from(raw_event);
                Some(DisplayEvent::WindowDestroy(WindowHandle::XlibHandle(
                    event.window,
                )))
            }
            xlib::UnmapNotify => None,

            xlib::ConfigureRequest => {
                let event = xlib::XConfigureRequestEvent::from(raw_event);
                Some(DisplayEvent::ConfigureRequest(WindowHandle::XlibHandle(
                    event.window,
                )))
            }

            xlib::KeyPress => {
                let event = xlib::XKeyEvent::from(raw_event);
                let sym = xw.keycode_to_keysym(event.keycode);
                Some(DisplayEvent::KeyCombo(
                    modmask_lookup::clean_mask(event.state),
                    sym,
                ))
            }

            xlib::ButtonPress => Some(from_button_press(raw_event, xw)),
            xlib::ButtonRelease => Some(DisplayEvent::ButtonRelease),

            xlib::MotionNotify => {
                let event = xlib::XMotionEvent::from(raw_event);
                Some(DisplayEvent::Movement(event.x_root, event.y_root))
            }

            xlib::EnterNotify => from_enter_notify(raw_event, xw),

            xlib::FocusIn => {
                let event = xlib::XFocusChangeEvent::from(raw_event);
                Some(DisplayEvent::FocusedWindowChanged(WindowHandle::XlibHandle(
                    event.window,
                )))
            }

            xlib::ClientMessage => from_client_message(raw_event, xw),

            // Listen for keyboard changes.
            xlib::MappingNotify => {
                let mut event = xlib::XMappingEvent::from(raw_event);
                if event.request == xlib::MappingKeyboard
                    || event.request == xlib::MappingModifier
                {
                    xw.refresh_keyboard(&mut event);
                    xw.reset_grabs(&crate::config::default_keybinds());
                }
                None
            }

            other => Some(DisplayEvent::Unknown(other)),
        }
    }
}

fn from_map_request(raw_event: xlib::XEvent, xw: &mut XWrap) -> Option<DisplayEvent> {
    let event = xlib::XMapRequestEvent::from(raw_event);
    // Check that the window isn't requesting to be unmanaged.
    let attrs = xw.get_window_attrs(event.window)?;
    if attrs.override_redirect > 0 {
        xw.map_unmanaged_window(event.window);
        return None;
    }
    Some(DisplayEvent::WindowCreate(WindowHandle::XlibHandle(
        event.window,
    )))
}

fn from_button_press(raw_event: xlib::XEvent, xw: &XWrap) -> DisplayEvent {
    let event = xlib::XButtonPressedEvent::from(raw_event);
    // A press on the root carries the client in `subwindow`.
    let window = if event.window == xw.get_default_root() && event.subwindow != 0 {
        event.subwindow
    } else {
        event.window
    };
    let mod_mask = modmask_lookup::clean_mask(event.state);
    // The press is frozen by our sync grab; an unmodified click is
    // replayed into the client so it still sees it.
    xw.allow_pointer_events(mod_mask == 0);
    DisplayEvent::MouseCombo(
        mod_mask,
        event.button,
        WindowHandle::XlibHandle(window),
        event.x_root,
        event.y_root,
    )
}

fn from_enter_notify(raw_event: xlib::XEvent, xw: &XWrap) -> Option<DisplayEvent> {
    let event = xlib::XEnterWindowEvent::from(raw_event);
    if event.window == xw.get_default_root() {
        return None;
    }
    Some(DisplayEvent::MouseEnteredWindow(WindowHandle::XlibHandle(
        event.window,
    )))
}

fn from_client_message(raw_event: xlib::XEvent, xw: &XWrap) -> Option<DisplayEvent> {
    let event = xlib::XClientMessageEvent::from(raw_event);
    if event.message_type == xw.atoms.NetCurrentDesktop {
        let index = usize::try_from(event.data.get_long(0)).ok()?;
        return Some(DisplayEvent::SendCommand(Command::GotoWorkspace(index)));
    }
    if event.message_type == xw.atoms.NetActiveWindow {
        return Some(DisplayEvent::WindowTakeFocus(WindowHandle::XlibHandle(
            event.window,
        )));
    }
    None
}
