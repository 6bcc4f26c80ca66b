#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_int, c_void};

use dynlib::{DynLib, DynLibError, opaque_struct};

pub mod protocol;
pub use protocol::*;

pub const WL_MARSHAL_FLAG_DESTROY: u32 = 1 << 0;

opaque_struct!(wl_proxy);

#[repr(C)]
#[derive(Debug, Clone)]
pub struct wl_message {
    pub name: *const c_char,
    pub signature: *const c_char,
    pub types: *const *const wl_interface,
}

unsafe impl Sync for wl_message {}
unsafe impl Send for wl_message {}

#[repr(C)]
#[derive(Debug, Clone)]
pub struct wl_interface {
    pub name: *const c_char,
    pub version: c_int,
    pub method_count: c_int,
    pub methods: *const wl_message,
    pub event_count: c_int,
    pub events: *const wl_message,
}

unsafe impl Sync for wl_interface {}
unsafe impl Send for wl_interface {}

#[repr(C)]
#[derive(Debug, Clone)]
pub struct wl_array {
    pub size: usize,
    pub alloc: usize,
    pub data: *mut c_void,
}

pub type wl_fixed = i32;

#[inline]
pub fn wl_fixed_to_f32(f: wl_fixed) -> f32 {
    (f as f32) / 256.0
}

pub struct Lib {
    pub wl_display_connect: unsafe extern "C" fn(name: *const c_char) -> *mut wl_display,
    pub wl_display_disconnect: unsafe extern "C" fn(display: *mut wl_display) -> *mut c_void,
    pub wl_display_dispatch: unsafe extern "C" fn(display: *mut wl_display) -> c_int,
    pub wl_display_dispatch_pending: unsafe extern "C" fn(display: *mut wl_display) -> c_int,
    pub wl_display_roundtrip: unsafe extern "C" fn(display: *mut wl_display) -> c_int,
    pub wl_display_flush: unsafe extern "C" fn(display: *mut wl_display) -> c_int,
    pub wl_display_get_error: unsafe extern "C" fn(display: *mut wl_display) -> c_int,

    pub wl_proxy_add_listener: unsafe extern "C" fn(
        proxy: *mut wl_proxy,
        implementation: *mut unsafe extern "C" fn(),
        data: *mut c_void,
    ) -> c_int,
    pub wl_proxy_destroy: unsafe extern "C" fn(proxy: *mut wl_proxy),
    pub wl_proxy_get_version: unsafe extern "C" fn(proxy: *mut wl_proxy) -> u32,
    pub wl_proxy_marshal_flags: unsafe extern "C" fn(
        proxy: *mut wl_proxy,
        opcode: u32,
        interface: *const wl_interface,
        version: u32,
        flags: u32,
        ...
    ) -> *mut wl_proxy,

    _dynlib: Option<DynLib>,
}

impl Lib {
    pub fn load() -> Result<Self, DynLibError> {
        let dynlib = DynLib::open(c"libwayland-client.so")
            .or_else(|_| DynLib::open(c"libwayland-client.so.0"))?;

        Ok(Self {
            wl_display_connect: dynlib.lookup(c"wl_display_connect")?,
            wl_display_disconnect: dynlib.lookup(c"wl_display_disconnect")?,
            wl_display_dispatch: dynlib.lookup(c"wl_display_dispatch")?,
            wl_display_dispatch_pending: dynlib.lookup(c"wl_display_dispatch_pending")?,
            wl_display_roundtrip: dynlib.lookup(c"wl_display_roundtrip")?,
            wl_display_flush: dynlib.lookup(c"wl_display_flush")?,
            wl_display_get_error: dynlib.lookup(c"wl_display_get_error")?,

            wl_proxy_add_listener: dynlib.lookup(c"wl_proxy_add_listener")?,
            wl_proxy_destroy: dynlib.lookup(c"wl_proxy_destroy")?,
            wl_proxy_get_version: dynlib.lookup(c"wl_proxy_get_version")?,
            wl_proxy_marshal_flags: dynlib.lookup(c"wl_proxy_marshal_flags")?,

            _dynlib: Some(dynlib),
        })
    }
}

unsafe extern "C" fn __noop_listener() {}
pub const __NOOP_LISTENER: unsafe extern "C" fn() = __noop_listener;
#[macro_export]
macro_rules! noop_listener {
    () => {
        unsafe {
            #[expect(clippy::missing_transmute_annotations)]
            std::mem::transmute($crate::libwayland::__NOOP_LISTENER)
        }
    };
}

#[cfg(test)]
pub(crate) mod stub {
    //! a `Lib` whose entry points do nothing, for exercising the layers above
    //! without a server. tests override individual fields with their own stubs
    //! (fn pointer transmutes, same trick as `noop_listener!`).

    use std::ffi::{c_char, c_int, c_void};
    use std::mem::transmute;

    use super::*;

    unsafe extern "C" fn connect(_name: *const c_char) -> *mut wl_display {
        std::ptr::null_mut()
    }

    unsafe extern "C" fn display_noop(_display: *mut wl_display) -> c_int {
        0
    }

    unsafe extern "C" fn disconnect(_display: *mut wl_display) -> *mut c_void {
        std::ptr::null_mut()
    }

    unsafe extern "C" fn add_listener(
        _proxy: *mut wl_proxy,
        _implementation: *mut unsafe extern "C" fn(),
        _data: *mut c_void,
    ) -> c_int {
        0
    }

    unsafe extern "C" fn proxy_destroy(_proxy: *mut wl_proxy) {}

    unsafe extern "C" fn proxy_get_version(_proxy: *mut wl_proxy) -> u32 {
        1
    }

    unsafe extern "C" fn marshal(
        _proxy: *mut wl_proxy,
        _opcode: u32,
        _interface: *const wl_interface,
        _version: u32,
        _flags: u32,
    ) -> *mut wl_proxy {
        std::ptr::null_mut()
    }

    pub(crate) type MarshalFn = unsafe extern "C" fn(
        proxy: *mut wl_proxy,
        opcode: u32,
        interface: *const wl_interface,
        version: u32,
        flags: u32,
    ) -> *mut wl_proxy;

    pub(crate) fn marshal_flags(
        f: MarshalFn,
    ) -> unsafe extern "C" fn(
        proxy: *mut wl_proxy,
        opcode: u32,
        interface: *const wl_interface,
        version: u32,
        flags: u32,
        ...
    ) -> *mut wl_proxy {
        // variadic callees that only read the fixed arguments are abi
        // compatible with this on the platforms wayland runs on.
        unsafe { transmute(f) }
    }

    pub(crate) fn lib() -> Lib {
        Lib {
            wl_display_connect: connect,
            wl_display_disconnect: disconnect,
            wl_display_dispatch: display_noop,
            wl_display_dispatch_pending: display_noop,
            wl_display_roundtrip: display_noop,
            wl_display_flush: display_noop,
            wl_display_get_error: display_noop,

            wl_proxy_add_listener: add_listener,
            wl_proxy_destroy: proxy_destroy,
            wl_proxy_get_version: proxy_get_version,
            wl_proxy_marshal_flags: marshal_flags(marshal),

            _dynlib: None,
        }
    }
}
