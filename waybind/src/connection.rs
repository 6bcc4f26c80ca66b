use std::ffi::CStr;
use std::ptr::{NonNull, null};

use dynlib::DynLibError;

use crate::handle::ListenerError;
use crate::libwayland as ffi;

#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error(transparent)]
    LoadLibrary(#[from] DynLibError),
    #[error("could not connect to wayland display")]
    Connect,
    #[error("could not create registry proxy")]
    Registry,
    #[error(transparent)]
    Listener(#[from] ListenerError),
    /// The transport reported a fatal error; no protocol state derived from
    /// this connection is trustworthy anymore.
    #[error("wayland transport error (code {code})")]
    Transport { code: i32 },
}

/// The single transport connection to the display server. Owns the loaded
/// `libwayland-client` and the `wl_display`; every [`crate::Handle`] borrows
/// the `Lib` it holds, so the connection cannot be torn down while bound
/// objects are still alive.
pub struct Connection {
    lib: ffi::Lib,
    wl_display: NonNull<ffi::wl_display>,
}

impl Connection {
    /// Connects to the display named `name`, or to the one selected by the
    /// usual environment (`WAYLAND_DISPLAY`, `XDG_RUNTIME_DIR`) when `None`.
    pub fn connect(name: Option<&CStr>) -> Result<Self, ConnectionError> {
        let lib = ffi::Lib::load()?;
        let ptr = unsafe { (lib.wl_display_connect)(name.map_or(null(), CStr::as_ptr)) };
        let wl_display = NonNull::new(ptr).ok_or(ConnectionError::Connect)?;
        log::debug!("connected to wayland display");
        Ok(Self { lib, wl_display })
    }

    pub fn lib(&self) -> &ffi::Lib {
        &self.lib
    }

    pub fn display(&self) -> *mut ffi::wl_display {
        self.wl_display.as_ptr()
    }

    /// Round-trip barrier: flushes every queued request and blocks until the
    /// server has processed them all and every resulting listener callback
    /// has run. Calling it with nothing outstanding is a no-op.
    pub fn roundtrip(&self) -> Result<(), ConnectionError> {
        let n = unsafe { (self.lib.wl_display_roundtrip)(self.wl_display.as_ptr()) };
        if n < 0 {
            return Err(self.transport_error());
        }
        Ok(())
    }

    pub fn flush(&self) -> Result<(), ConnectionError> {
        let n = unsafe { (self.lib.wl_display_flush)(self.wl_display.as_ptr()) };
        if n < 0 {
            return Err(self.transport_error());
        }
        Ok(())
    }

    /// Blocks until at least one event has been dispatched; returns the
    /// number of dispatched events.
    pub fn dispatch(&self) -> Result<u32, ConnectionError> {
        let n = unsafe { (self.lib.wl_display_dispatch)(self.wl_display.as_ptr()) };
        if n < 0 {
            return Err(self.transport_error());
        }
        Ok(n as u32)
    }

    /// Dispatches already-queued events without reading from the socket.
    pub fn dispatch_pending(&self) -> Result<u32, ConnectionError> {
        let n = unsafe { (self.lib.wl_display_dispatch_pending)(self.wl_display.as_ptr()) };
        if n < 0 {
            return Err(self.transport_error());
        }
        Ok(n as u32)
    }

    fn transport_error(&self) -> ConnectionError {
        let code = unsafe { (self.lib.wl_display_get_error)(self.wl_display.as_ptr()) };
        ConnectionError::Transport { code }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(lib: ffi::Lib, wl_display: NonNull<ffi::wl_display>) -> Self {
        Self { lib, wl_display }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        unsafe {
            (self.lib.wl_display_disconnect)(self.wl_display.as_ptr());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::ffi::c_int;

    use super::*;
    use crate::libwayland::stub;

    thread_local! {
        static ROUNDTRIPS: Cell<u32> = const { Cell::new(0) };
    }

    unsafe extern "C" fn counting_roundtrip(_display: *mut ffi::wl_display) -> c_int {
        ROUNDTRIPS.with(|count| count.set(count.get() + 1));
        0
    }

    unsafe extern "C" fn failing_roundtrip(_display: *mut ffi::wl_display) -> c_int {
        -1
    }

    unsafe extern "C" fn eproto(_display: *mut ffi::wl_display) -> c_int {
        libc::EPROTO
    }

    #[test]
    fn barrier_is_idempotent() {
        ROUNDTRIPS.with(|count| count.set(0));
        let mut lib = stub::lib();
        lib.wl_display_roundtrip = counting_roundtrip;
        let conn = Connection::from_parts(lib, NonNull::dangling());

        conn.roundtrip().unwrap();
        conn.roundtrip().unwrap();
        assert_eq!(ROUNDTRIPS.with(Cell::get), 2);
    }

    #[test]
    fn barrier_failure_reports_transport_error() {
        let mut lib = stub::lib();
        lib.wl_display_roundtrip = failing_roundtrip;
        lib.wl_display_get_error = eproto;
        let conn = Connection::from_parts(lib, NonNull::dangling());

        match conn.roundtrip() {
            Err(ConnectionError::Transport { code }) => assert_eq!(code, libc::EPROTO),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
