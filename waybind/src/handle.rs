use std::ffi::{CStr, c_void};
use std::fmt;
use std::mem;
use std::ptr::NonNull;

use crate::interface::Interface;
use crate::libwayland as ffi;

/// `acquire` was handed a null pointer. Binds and factory requests return
/// null on failure, so this is always a caller-side bug or an out of memory
/// condition, never recovered from.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("null {} protocol object pointer", .interface.to_str().unwrap_or("?"))]
pub struct InvalidHandleError {
    pub interface: &'static CStr,
}

/// Listener registration was refused: the proxy already has a listener or is
/// no longer dispatchable.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("could not attach {} listener", .interface.to_str().unwrap_or("?"))]
pub struct ListenerError {
    pub interface: &'static CStr,
}

/// Exclusive owner of one protocol object pointer. Dropping the handle issues
/// the release operation the object's [`Interface`] descriptor names, exactly
/// once; moving the handle transfers ownership and leaves nothing behind to
/// release twice. The wrapped pointer is never null.
pub struct Handle<'lib, T: Interface> {
    lib: &'lib ffi::Lib,
    ptr: NonNull<T>,
}

impl<'lib, T: Interface> Handle<'lib, T> {
    pub fn acquire(lib: &'lib ffi::Lib, ptr: *mut T) -> Result<Self, InvalidHandleError> {
        match NonNull::new(ptr) {
            Some(ptr) => Ok(Self { lib, ptr }),
            None => Err(InvalidHandleError { interface: T::NAME }),
        }
    }

    /// Borrows the raw pointer; the pointer must not be used past the handle.
    pub fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub fn lib(&self) -> &'lib ffi::Lib {
        self.lib
    }

    /// Releases the object now instead of at end of scope.
    pub fn release(self) {}

    /// Gives up ownership without releasing the object.
    pub fn into_raw(self) -> *mut T {
        let ptr = self.ptr.as_ptr();
        mem::forget(self);
        ptr
    }

    /// Attaches the interface's listener struct with an explicit context
    /// pointer. At most one listener per object; a second registration fails
    /// with [`ListenerError`].
    ///
    /// # Safety
    /// `data` must stay valid (and unaliased during dispatch) for as long as
    /// events can be delivered to this object.
    pub unsafe fn add_listener(
        &self,
        listener: &'static T::Listener,
        data: *mut c_void,
    ) -> Result<(), ListenerError> {
        let rc = unsafe {
            (self.lib.wl_proxy_add_listener)(
                self.ptr.as_ptr() as *mut ffi::wl_proxy,
                listener as *const T::Listener as *mut unsafe extern "C" fn(),
                data,
            )
        };
        if rc == 0 {
            Ok(())
        } else {
            Err(ListenerError { interface: T::NAME })
        }
    }
}

impl<T: Interface> fmt::Debug for Handle<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}[{:?}]", self.ptr, T::NAME)
    }
}

impl<T: Interface> Drop for Handle<'_, T> {
    fn drop(&mut self) {
        unsafe { T::release(self.lib, self.ptr.as_ptr()) };
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::ptr::null_mut;

    use super::*;
    use crate::libwayland::stub;

    #[allow(non_camel_case_types)]
    #[repr(C)]
    struct fake_object {
        _data: [u8; 0],
    }

    static FAKE_INTERFACE: ffi::wl_interface = ffi::wl_interface {
        name: c"fake_object".as_ptr(),
        version: 1,
        method_count: 0,
        methods: std::ptr::null(),
        event_count: 0,
        events: std::ptr::null(),
    };

    thread_local! {
        static RELEASED: Cell<u32> = const { Cell::new(0) };
    }

    impl Interface for fake_object {
        const NAME: &'static CStr = c"fake_object";
        const VERSION: u32 = 1;
        const INTERFACE: &'static ffi::wl_interface = &FAKE_INTERFACE;

        type Listener = ();

        unsafe fn release(_lib: &ffi::Lib, _ptr: *mut Self) {
            RELEASED.with(|released| released.set(released.get() + 1));
        }
    }

    fn fake_ptr() -> *mut fake_object {
        0x1000usize as *mut fake_object
    }

    #[test]
    fn acquire_null_is_rejected_and_never_released() {
        RELEASED.with(|released| released.set(0));
        let lib = stub::lib();

        let err = Handle::<fake_object>::acquire(&lib, null_mut()).unwrap_err();
        assert_eq!(
            err,
            InvalidHandleError {
                interface: c"fake_object"
            }
        );
        assert_eq!(RELEASED.with(Cell::get), 0);
    }

    #[test]
    fn drop_releases_exactly_once() {
        RELEASED.with(|released| released.set(0));
        let lib = stub::lib();

        let handle = Handle::acquire(&lib, fake_ptr()).unwrap();
        assert_eq!(RELEASED.with(Cell::get), 0);
        drop(handle);
        assert_eq!(RELEASED.with(Cell::get), 1);
    }

    #[test]
    fn moves_do_not_double_release() {
        RELEASED.with(|released| released.set(0));
        let lib = stub::lib();

        let handle = Handle::acquire(&lib, fake_ptr()).unwrap();
        let moved = handle;
        let moved_again = std::convert::identity(moved);
        assert_eq!(RELEASED.with(Cell::get), 0);
        moved_again.release();
        assert_eq!(RELEASED.with(Cell::get), 1);
    }

    #[test]
    fn into_raw_forgoes_release() {
        RELEASED.with(|released| released.set(0));
        let lib = stub::lib();

        let handle = Handle::acquire(&lib, fake_ptr()).unwrap();
        let ptr = handle.into_raw();
        assert_eq!(ptr, fake_ptr());
        assert_eq!(RELEASED.with(Cell::get), 0);
    }

    #[test]
    fn add_listener_surfaces_refusal() {
        unsafe extern "C" fn refuse(
            _proxy: *mut ffi::wl_proxy,
            _implementation: *mut unsafe extern "C" fn(),
            _data: *mut c_void,
        ) -> i32 {
            -1
        }

        let lib = stub::lib();
        let handle = Handle::acquire(&lib, fake_ptr()).unwrap();
        static LISTENER: () = ();
        assert_eq!(unsafe { handle.add_listener(&LISTENER, null_mut()) }, Ok(()));

        let mut refusing = stub::lib();
        refusing.wl_proxy_add_listener = refuse;
        let handle = Handle::acquire(&refusing, fake_ptr()).unwrap();
        assert_eq!(
            unsafe { handle.add_listener(&LISTENER, null_mut()) },
            Err(ListenerError {
                interface: c"fake_object"
            })
        );
    }
}
