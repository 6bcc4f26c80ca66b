//! Draws a translucent green window and exits on the first key press.

use std::ffi::c_void;

use anyhow::Context as _;
use waybind::libwayland as wl;
use waybind::{Connection, Handle, ShmAllocator, run_fill};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const PIXEL: u32 = 0x4000ff00;

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!(
            "{level:<5} {target}:{line:<4} > {text}",
            level = record.level(),
            target = record.target(),
            line = record
                .line()
                .map_or_else(|| "?".to_string(), |line| line.to_string()),
            text = record.args(),
        );
    }

    fn flush(&self) {}
}

impl Logger {
    fn init() {
        log::set_logger(&Logger).expect("could not set logger");
        log::set_max_level(log::LevelFilter::Debug);
    }
}

/// Everything the listeners write into. A pointer to this is the context of
/// every registration; dispatch is single threaded, so the callbacks never
/// run concurrently with the main loop or each other.
struct State {
    lib: *const wl::Lib,
    argb8888: bool,
    seat_capabilities: u32,
    configured: bool,
    close: bool,
    key_pressed: bool,
}

unsafe extern "C" fn handle_wl_shm_format(data: *mut c_void, _wl_shm: *mut wl::wl_shm, format: u32) {
    let state = unsafe { &mut *(data as *mut State) };
    log::debug!("wl_shm format {format:#x}");
    if format == wl::WL_SHM_FORMAT_ARGB8888 {
        state.argb8888 = true;
    }
}

const WL_SHM_LISTENER: wl::wl_shm_listener = wl::wl_shm_listener {
    format: handle_wl_shm_format,
};

unsafe extern "C" fn handle_wl_seat_capabilities(
    data: *mut c_void,
    _wl_seat: *mut wl::wl_seat,
    capabilities: u32,
) {
    let state = unsafe { &mut *(data as *mut State) };
    state.seat_capabilities = capabilities;
}

const WL_SEAT_LISTENER: wl::wl_seat_listener = wl::wl_seat_listener {
    capabilities: handle_wl_seat_capabilities,
    name: waybind::noop_listener!(),
};

unsafe extern "C" fn handle_wl_keyboard_key(
    data: *mut c_void,
    _wl_keyboard: *mut wl::wl_keyboard,
    _serial: u32,
    _time: u32,
    key: u32,
    key_state: u32,
) {
    let state = unsafe { &mut *(data as *mut State) };
    if key_state == wl::WL_KEYBOARD_KEY_STATE_PRESSED {
        log::debug!("key {key} pressed");
        state.key_pressed = true;
    }
}

const WL_KEYBOARD_LISTENER: wl::wl_keyboard_listener = wl::wl_keyboard_listener {
    keymap: waybind::noop_listener!(),
    enter: waybind::noop_listener!(),
    leave: waybind::noop_listener!(),
    key: handle_wl_keyboard_key,
    modifiers: waybind::noop_listener!(),
    repeat_info: waybind::noop_listener!(),
};

unsafe extern "C" fn handle_wl_pointer_button(
    _data: *mut c_void,
    _wl_pointer: *mut wl::wl_pointer,
    _serial: u32,
    _time: u32,
    button: u32,
    button_state: u32,
) {
    if button_state == wl::WL_POINTER_BUTTON_STATE_PRESSED {
        log::debug!("pointer button {button} pressed");
    }
}

const WL_POINTER_LISTENER: wl::wl_pointer_listener = wl::wl_pointer_listener {
    enter: waybind::noop_listener!(),
    leave: waybind::noop_listener!(),
    motion: waybind::noop_listener!(),
    button: handle_wl_pointer_button,
    axis: waybind::noop_listener!(),
    frame: waybind::noop_listener!(),
    axis_source: waybind::noop_listener!(),
    axis_stop: waybind::noop_listener!(),
    axis_discrete: waybind::noop_listener!(),
    axis_value120: waybind::noop_listener!(),
    axis_relative_direction: waybind::noop_listener!(),
};

unsafe extern "C" fn handle_wl_touch_down(
    _data: *mut c_void,
    _wl_touch: *mut wl::wl_touch,
    _serial: u32,
    _time: u32,
    _surface: *mut wl::wl_surface,
    id: i32,
    _x: wl::wl_fixed,
    _y: wl::wl_fixed,
) {
    log::debug!("touch {id} down");
}

const WL_TOUCH_LISTENER: wl::wl_touch_listener = wl::wl_touch_listener {
    down: handle_wl_touch_down,
    up: waybind::noop_listener!(),
    motion: waybind::noop_listener!(),
    frame: waybind::noop_listener!(),
    cancel: waybind::noop_listener!(),
    shape: waybind::noop_listener!(),
    orientation: waybind::noop_listener!(),
};

unsafe extern "C" fn handle_xdg_wm_base_ping(
    data: *mut c_void,
    xdg_wm_base: *mut wl::xdg_wm_base,
    serial: u32,
) {
    let state = unsafe { &mut *(data as *mut State) };
    unsafe { wl::xdg_wm_base_pong(&*state.lib, xdg_wm_base, serial) };
}

const XDG_WM_BASE_LISTENER: wl::xdg_wm_base_listener = wl::xdg_wm_base_listener {
    ping: handle_xdg_wm_base_ping,
};

unsafe extern "C" fn handle_xdg_surface_configure(
    data: *mut c_void,
    xdg_surface: *mut wl::xdg_surface,
    serial: u32,
) {
    let state = unsafe { &mut *(data as *mut State) };
    unsafe { wl::xdg_surface_ack_configure(&*state.lib, xdg_surface, serial) };
    state.configured = true;
}

const XDG_SURFACE_LISTENER: wl::xdg_surface_listener = wl::xdg_surface_listener {
    configure: handle_xdg_surface_configure,
};

unsafe extern "C" fn handle_xdg_toplevel_close(
    data: *mut c_void,
    _xdg_toplevel: *mut wl::xdg_toplevel,
) {
    let state = unsafe { &mut *(data as *mut State) };
    state.close = true;
}

const XDG_TOPLEVEL_LISTENER: wl::xdg_toplevel_listener = wl::xdg_toplevel_listener {
    configure: waybind::noop_listener!(),
    close: handle_xdg_toplevel_close,
    configure_bounds: waybind::noop_listener!(),
    wm_capabilities: waybind::noop_listener!(),
};

fn main() -> anyhow::Result<()> {
    Logger::init();

    let runtime_dir =
        std::env::var_os("XDG_RUNTIME_DIR").context("XDG_RUNTIME_DIR is not set")?;

    let conn = Connection::connect(None)?;
    let lib = conn.lib();

    let (compositor, shm, seat, wm_base) =
        conn.resolve::<(wl::wl_compositor, wl::wl_shm, wl::wl_seat, wl::xdg_wm_base)>()?;
    let (compositor, shm, seat, wm_base) = (compositor?, shm?, seat?, wm_base?);

    let mut state = State {
        lib,
        argb8888: false,
        seat_capabilities: 0,
        configured: false,
        close: false,
        key_pressed: false,
    };
    let state_ptr = &mut state as *mut State as *mut c_void;

    unsafe {
        shm.add_listener(&WL_SHM_LISTENER, state_ptr)?;
        seat.add_listener(&WL_SEAT_LISTENER, state_ptr)?;
        wm_base.add_listener(&XDG_WM_BASE_LISTENER, state_ptr)?;
    }
    conn.roundtrip()?;

    anyhow::ensure!(state.argb8888, "server does not support ARGB8888");

    let keyboard = if state.seat_capabilities & wl::WL_SEAT_CAPABILITY_KEYBOARD != 0 {
        let keyboard = Handle::acquire(lib, unsafe { wl::wl_seat_get_keyboard(lib, seat.as_ptr()) })?;
        unsafe { keyboard.add_listener(&WL_KEYBOARD_LISTENER, state_ptr)? };
        Some(keyboard)
    } else {
        log::warn!("seat has no keyboard, close the window to exit");
        None
    };
    let _pointer = if state.seat_capabilities & wl::WL_SEAT_CAPABILITY_POINTER != 0 {
        let pointer = Handle::acquire(lib, unsafe { wl::wl_seat_get_pointer(lib, seat.as_ptr()) })?;
        unsafe { pointer.add_listener(&WL_POINTER_LISTENER, state_ptr)? };
        Some(pointer)
    } else {
        None
    };
    let _touch = if state.seat_capabilities & wl::WL_SEAT_CAPABILITY_TOUCH != 0 {
        let touch = Handle::acquire(lib, unsafe { wl::wl_seat_get_touch(lib, seat.as_ptr()) })?;
        unsafe { touch.add_listener(&WL_TOUCH_LISTENER, state_ptr)? };
        Some(touch)
    } else {
        None
    };

    let surface = Handle::acquire(lib, unsafe {
        wl::wl_compositor_create_surface(lib, compositor.as_ptr())
    })?;
    let xdg_surface = Handle::acquire(lib, unsafe {
        wl::xdg_wm_base_get_xdg_surface(lib, wm_base.as_ptr(), surface.as_ptr())
    })?;
    let toplevel = Handle::acquire(lib, unsafe {
        wl::xdg_surface_get_toplevel(lib, xdg_surface.as_ptr())
    })?;
    unsafe {
        xdg_surface.add_listener(&XDG_SURFACE_LISTENER, state_ptr)?;
        toplevel.add_listener(&XDG_TOPLEVEL_LISTENER, state_ptr)?;
        wl::xdg_toplevel_set_title(lib, toplevel.as_ptr(), c"paint".as_ptr());
        wl::xdg_toplevel_set_app_id(lib, toplevel.as_ptr(), c"paint".as_ptr());
        wl::wl_surface_commit(lib, surface.as_ptr());
    }

    while !state.configured {
        conn.dispatch()?;
    }

    let allocator = ShmAllocator::new(runtime_dir);
    let mut buffer = allocator.allocate(&shm, WIDTH, HEIGHT, wl::WL_SHM_FORMAT_ARGB8888)?;
    run_fill(&mut buffer, |_x, _y| PIXEL);

    unsafe {
        wl::wl_surface_attach(lib, surface.as_ptr(), buffer.wl_buffer().as_ptr(), 0, 0);
        wl::wl_surface_damage(lib, surface.as_ptr(), 0, 0, WIDTH as i32, HEIGHT as i32);
        wl::wl_surface_commit(lib, surface.as_ptr());
    }

    while !state.close && !state.key_pressed {
        conn.dispatch()?;
    }

    drop(keyboard);
    Ok(())
}
