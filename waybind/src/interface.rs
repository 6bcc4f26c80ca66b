use std::ffi::CStr;

use crate::libwayland as ffi;

/// Compile-time descriptor for one protocol object type: its interface
/// name/metadata, the newest version this crate speaks, the listener struct
/// shape, and the release request the server expects when the object goes
/// away. Using a type with [`crate::Handle`] or [`crate::Connection::resolve`]
/// without a descriptor is a compile error.
pub trait Interface {
    const NAME: &'static CStr;
    const VERSION: u32;
    const INTERFACE: &'static ffi::wl_interface;

    /// `<iface>_listener` struct of this interface, `()` if it has no events.
    type Listener;

    /// # Safety
    /// `ptr` must be a live proxy of this interface; it is gone afterwards.
    unsafe fn release(lib: &ffi::Lib, ptr: *mut Self);
}

// client-side teardown for interfaces without a destructor request.
unsafe fn destroy<T>(lib: &ffi::Lib, ptr: *mut T) {
    unsafe { (lib.wl_proxy_destroy)(ptr as *mut ffi::wl_proxy) }
}

macro_rules! descriptors {
    ($($ty:ty {
        name: $name:literal,
        version: $version:literal,
        interface: $interface:expr,
        listener: $listener:ty,
        release: $release:expr,
    })*) => {
        $(
            impl Interface for $ty {
                const NAME: &'static CStr = $name;
                const VERSION: u32 = $version;
                const INTERFACE: &'static ffi::wl_interface = $interface;

                type Listener = $listener;

                unsafe fn release(lib: &ffi::Lib, ptr: *mut Self) {
                    unsafe { $release(lib, ptr) }
                }
            }
        )*
    };
}

descriptors! {
    ffi::wl_callback {
        name: c"wl_callback",
        version: 1,
        interface: &ffi::wl_callback_interface,
        listener: ffi::wl_callback_listener,
        release: destroy,
    }
    ffi::wl_registry {
        name: c"wl_registry",
        version: 1,
        interface: &ffi::wl_registry_interface,
        listener: ffi::wl_registry_listener,
        release: destroy,
    }
    ffi::wl_compositor {
        name: c"wl_compositor",
        version: 6,
        interface: &ffi::wl_compositor_interface,
        listener: (),
        release: destroy,
    }
    ffi::wl_surface {
        name: c"wl_surface",
        version: 6,
        interface: &ffi::wl_surface_interface,
        listener: ffi::wl_surface_listener,
        release: ffi::wl_surface_destroy,
    }
    ffi::wl_buffer {
        name: c"wl_buffer",
        version: 1,
        interface: &ffi::wl_buffer_interface,
        listener: ffi::wl_buffer_listener,
        release: ffi::wl_buffer_destroy,
    }
    // wl_shm.release exists only since v2, bind v1 and tear down client-side.
    ffi::wl_shm {
        name: c"wl_shm",
        version: 1,
        interface: &ffi::wl_shm_interface,
        listener: ffi::wl_shm_listener,
        release: destroy,
    }
    ffi::wl_shm_pool {
        name: c"wl_shm_pool",
        version: 1,
        interface: &ffi::wl_shm_pool_interface,
        listener: (),
        release: ffi::wl_shm_pool_destroy,
    }
    ffi::wl_seat {
        name: c"wl_seat",
        version: 9,
        interface: &ffi::wl_seat_interface,
        listener: ffi::wl_seat_listener,
        release: ffi::wl_seat_release,
    }
    ffi::wl_keyboard {
        name: c"wl_keyboard",
        version: 9,
        interface: &ffi::wl_keyboard_interface,
        listener: ffi::wl_keyboard_listener,
        release: ffi::wl_keyboard_release,
    }
    ffi::wl_pointer {
        name: c"wl_pointer",
        version: 9,
        interface: &ffi::wl_pointer_interface,
        listener: ffi::wl_pointer_listener,
        release: ffi::wl_pointer_release,
    }
    ffi::wl_touch {
        name: c"wl_touch",
        version: 9,
        interface: &ffi::wl_touch_interface,
        listener: ffi::wl_touch_listener,
        release: ffi::wl_touch_release,
    }
    ffi::xdg_wm_base {
        name: c"xdg_wm_base",
        version: 6,
        interface: &ffi::xdg_wm_base_interface,
        listener: ffi::xdg_wm_base_listener,
        release: ffi::xdg_wm_base_destroy,
    }
    ffi::xdg_surface {
        name: c"xdg_surface",
        version: 6,
        interface: &ffi::xdg_surface_interface,
        listener: ffi::xdg_surface_listener,
        release: ffi::xdg_surface_destroy,
    }
    ffi::xdg_toplevel {
        name: c"xdg_toplevel",
        version: 6,
        interface: &ffi::xdg_toplevel_interface,
        listener: ffi::xdg_toplevel_listener,
        release: ffi::xdg_toplevel_destroy,
    }
}
