use std::ffi::{CStr, c_char, c_void};
use std::ptr::null_mut;

use crate::connection::{Connection, ConnectionError};
use crate::handle::{Handle, InvalidHandleError};
use crate::interface::Interface;
use crate::libwayland as ffi;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The server never advertised a global of this interface. Per slot;
    /// the other requested globals resolve independently.
    #[error("global {} was not advertised", .interface.to_str().unwrap_or("?"))]
    NotAdvertised { interface: &'static CStr },
    #[error(transparent)]
    Bind(#[from] InvalidHandleError),
}

/// One requested global: descriptor data copied out of an [`Interface`] impl
/// plus the bind result. Slot order is the caller's type order and is the
/// tie-break for advertisement matching.
pub struct Slot {
    name: &'static CStr,
    interface: &'static ffi::wl_interface,
    version: u32,
    ptr: *mut c_void,
    global: u32,
}

impl Slot {
    fn of<T: Interface>() -> Self {
        Self {
            name: T::NAME,
            interface: T::INTERFACE,
            version: T::VERSION,
            ptr: null_mut(),
            global: 0,
        }
    }

    fn take<'lib, T: Interface>(
        self,
        lib: &'lib ffi::Lib,
    ) -> Result<Handle<'lib, T>, ResolveError> {
        if self.ptr.is_null() {
            return Err(ResolveError::NotAdvertised { interface: T::NAME });
        }
        Ok(Handle::acquire(lib, self.ptr as *mut T)?)
    }
}

struct Scan<'a> {
    lib: &'a ffi::Lib,
    slots: &'a mut [Slot],
}

unsafe extern "C" fn handle_wl_registry_global(
    data: *mut c_void,
    wl_registry: *mut ffi::wl_registry,
    name: u32,
    interface: *const c_char,
    version: u32,
) {
    unsafe {
        let scan = &mut *(data as *mut Scan);

        // CStr equality is full-length, a shorter interface name must not
        // match as a prefix of a longer one. the advertisement is consumed
        // entirely within this call, nothing borrows past it.
        let interface = CStr::from_ptr(interface);

        let Some(slot) = scan.slots.iter_mut().find(|slot| slot.name == interface) else {
            log::debug!("unused interface: {interface:?}");
            return;
        };

        if !slot.ptr.is_null() {
            // servers may advertise several instances; first one wins.
            log::warn!(
                "duplicate global {interface:?} (name {name}) ignored, keeping name {}",
                slot.global
            );
            return;
        }

        let version = slot.version.min(version);
        slot.ptr = ffi::wl_registry_bind(scan.lib, wl_registry, name, slot.interface, version);
        slot.global = name;
        log::debug!("bound {interface:?} (name {name}, version {version})");
    }
}

const WL_REGISTRY_LISTENER: ffi::wl_registry_listener = ffi::wl_registry_listener {
    global: handle_wl_registry_global,
    global_remove: crate::noop_listener!(),
};

/// Ordered set of global types to resolve in one pass, implemented for tuples
/// of [`Interface`] types up to arity 8.
pub trait Globals {
    type Handles<'lib>;

    fn slots() -> Vec<Slot>;

    /// # Safety
    /// `slots` must be the vec produced by `Self::slots()`, scanned against
    /// live registry advertisements for these exact types, in order.
    unsafe fn take<'lib>(lib: &'lib ffi::Lib, slots: Vec<Slot>) -> Self::Handles<'lib>;
}

macro_rules! impl_globals {
    ($($t:ident),+) => {
        impl<$($t: Interface),+> Globals for ($($t,)+) {
            type Handles<'lib> = ($(Result<Handle<'lib, $t>, ResolveError>,)+);

            fn slots() -> Vec<Slot> {
                vec![$(Slot::of::<$t>()),+]
            }

            unsafe fn take<'lib>(lib: &'lib ffi::Lib, slots: Vec<Slot>) -> Self::Handles<'lib> {
                let mut slots = slots.into_iter();
                ($({
                    let slot = slots.next().expect("slot count mismatch");
                    slot.take::<$t>(lib)
                },)+)
            }
        }
    };
}

impl_globals!(A);
impl_globals!(A, B);
impl_globals!(A, B, C);
impl_globals!(A, B, C, D);
impl_globals!(A, B, C, D, E);
impl_globals!(A, B, C, D, E, F);
impl_globals!(A, B, C, D, E, F, G);
impl_globals!(A, B, C, D, E, F, G, H);

impl Connection {
    /// Enumerates the globals the server advertises and binds one object per
    /// requested type, matching advertisements against the requested types in
    /// declaration order. Returns one result per slot: a requested type the
    /// server never advertised yields [`ResolveError::NotAdvertised`] for its
    /// slot only, the rest still resolve. Duplicate advertisements of an
    /// already-bound interface are ignored.
    ///
    /// Blocks on the round-trip barrier, so every advertisement callback has
    /// run by the time this returns. A transport failure is fatal to the
    /// whole call.
    pub fn resolve<G: Globals>(&self) -> Result<G::Handles<'_>, ConnectionError> {
        let registry = unsafe { ffi::wl_display_get_registry(self.lib(), self.display()) };
        let registry = Handle::<ffi::wl_registry>::acquire(self.lib(), registry)
            .map_err(|_| ConnectionError::Registry)?;

        let mut slots = G::slots();
        let mut scan = Scan {
            lib: self.lib(),
            slots: &mut slots,
        };
        unsafe {
            registry.add_listener(&WL_REGISTRY_LISTENER, &mut scan as *mut Scan as *mut c_void)?;
        }

        self.roundtrip()?;

        // enumeration is done, the registry proxy has served its purpose.
        drop(registry);

        Ok(unsafe { G::take(self.lib(), slots) })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::ffi::{CString, c_int};
    use std::ptr::NonNull;

    use super::*;
    use crate::libwayland::stub;

    thread_local! {
        static NEXT_PROXY: Cell<usize> = const { Cell::new(0) };
        static LAST_BIND: Cell<(u32, u32)> = const { Cell::new((u32::MAX, 0)) };
        static LISTENERS: RefCell<Vec<(*mut ffi::wl_proxy, *const ffi::wl_registry_listener, *mut c_void)>> =
            const { RefCell::new(Vec::new()) };
        static SCRIPT: RefCell<Vec<(u32, CString, u32)>> = const { RefCell::new(Vec::new()) };
        static DESTROYED: Cell<u32> = const { Cell::new(0) };
    }

    unsafe extern "C" fn allocating_marshal(
        _proxy: *mut ffi::wl_proxy,
        opcode: u32,
        _interface: *const ffi::wl_interface,
        version: u32,
        _flags: u32,
    ) -> *mut ffi::wl_proxy {
        LAST_BIND.with(|last| last.set((opcode, version)));
        NEXT_PROXY.with(|next| {
            let n = next.get() + 0x10;
            next.set(n);
            (0x4000 + n) as *mut ffi::wl_proxy
        })
    }

    unsafe extern "C" fn recording_add_listener(
        proxy: *mut ffi::wl_proxy,
        implementation: *mut unsafe extern "C" fn(),
        data: *mut c_void,
    ) -> c_int {
        LISTENERS.with(|listeners| {
            listeners.borrow_mut().push((
                proxy,
                implementation as *const ffi::wl_registry_listener,
                data,
            ))
        });
        0
    }

    // drains the scripted advertisements into every registered listener,
    // exactly what a server-backed roundtrip would do for enumeration.
    unsafe extern "C" fn serving_roundtrip(_display: *mut ffi::wl_display) -> c_int {
        let listeners = LISTENERS.with(|listeners| listeners.borrow().clone());
        let script: Vec<(u32, CString, u32)> =
            SCRIPT.with(|script| script.borrow_mut().drain(..).collect());
        for (proxy, listener, data) in listeners {
            for (name, interface, version) in script.iter() {
                unsafe {
                    ((*listener).global)(
                        data,
                        proxy as *mut ffi::wl_registry,
                        *name,
                        interface.as_ptr(),
                        *version,
                    );
                }
            }
        }
        0
    }

    unsafe extern "C" fn counting_destroy(_proxy: *mut ffi::wl_proxy) {
        DESTROYED.with(|count| count.set(count.get() + 1));
    }

    fn reset() {
        NEXT_PROXY.with(|next| next.set(0));
        LAST_BIND.with(|last| last.set((u32::MAX, 0)));
        LISTENERS.with(|listeners| listeners.borrow_mut().clear());
        SCRIPT.with(|script| script.borrow_mut().clear());
        DESTROYED.with(|count| count.set(0));
    }

    fn scan_lib() -> ffi::Lib {
        let mut lib = stub::lib();
        lib.wl_proxy_marshal_flags = stub::marshal_flags(allocating_marshal);
        lib
    }

    fn advertise(scan: &mut Scan, name: u32, interface: &CStr, version: u32) {
        let registry = 0x3000 as *mut ffi::wl_registry;
        unsafe {
            handle_wl_registry_global(
                scan as *mut Scan as *mut c_void,
                registry,
                name,
                interface.as_ptr(),
                version,
            );
        }
    }

    #[test]
    fn name_comparison_is_length_exact() {
        reset();
        let lib = scan_lib();
        let mut slots = vec![Slot::of::<ffi::wl_shm>()];
        let mut scan = Scan {
            lib: &lib,
            slots: &mut slots,
        };

        advertise(&mut scan, 1, c"wl_sh", 1);
        advertise(&mut scan, 2, c"wl_shm_pool", 1);
        assert!(slots[0].ptr.is_null());

        let mut scan = Scan {
            lib: &lib,
            slots: &mut slots,
        };
        advertise(&mut scan, 3, c"wl_shm", 1);
        assert!(!slots[0].ptr.is_null());
        assert_eq!(slots[0].global, 3);
    }

    #[test]
    fn first_advertisement_wins() {
        reset();
        let lib = scan_lib();
        let mut slots = vec![Slot::of::<ffi::wl_seat>()];
        let mut scan = Scan {
            lib: &lib,
            slots: &mut slots,
        };

        advertise(&mut scan, 1, c"wl_seat", 9);
        let bound = slots[0].ptr;
        let mut scan = Scan {
            lib: &lib,
            slots: &mut slots,
        };
        advertise(&mut scan, 2, c"wl_seat", 9);

        assert_eq!(slots[0].global, 1);
        assert_eq!(slots[0].ptr, bound);
    }

    #[test]
    fn bind_version_is_capped_at_supported() {
        reset();
        let lib = scan_lib();
        let mut slots = vec![Slot::of::<ffi::wl_seat>()];
        let mut scan = Scan {
            lib: &lib,
            slots: &mut slots,
        };

        advertise(&mut scan, 1, c"wl_seat", 5);
        // opcode 0 is wl_registry.bind.
        assert_eq!(LAST_BIND.with(Cell::get), (0, 5));

        let mut slots = vec![Slot::of::<ffi::wl_seat>()];
        let mut scan = Scan {
            lib: &lib,
            slots: &mut slots,
        };
        advertise(&mut scan, 2, c"wl_seat", 42);
        assert_eq!(LAST_BIND.with(Cell::get), (0, 9));
    }

    #[test]
    fn resolution_is_partial_per_slot() {
        reset();
        let mut lib = scan_lib();
        lib.wl_proxy_add_listener = recording_add_listener;
        lib.wl_display_roundtrip = serving_roundtrip;
        let conn = Connection::from_parts(lib, NonNull::dangling());

        SCRIPT.with(|script| {
            let mut script = script.borrow_mut();
            script.push((1, CString::new("wl_compositor").unwrap(), 6));
            script.push((2, CString::new("wl_shm").unwrap(), 1));
        });

        let (compositor, seat, shm) = conn
            .resolve::<(ffi::wl_compositor, ffi::wl_seat, ffi::wl_shm)>()
            .unwrap();

        assert!(compositor.is_ok());
        assert_eq!(
            seat.map(|handle| handle.as_ptr()),
            Err(ResolveError::NotAdvertised {
                interface: c"wl_seat"
            })
        );
        assert!(shm.is_ok());
    }

    #[test]
    fn advertisements_are_consumed_before_resolve_returns() {
        reset();
        let mut lib = scan_lib();
        lib.wl_proxy_add_listener = recording_add_listener;
        lib.wl_display_roundtrip = serving_roundtrip;
        lib.wl_proxy_destroy = counting_destroy;
        let conn = Connection::from_parts(lib, NonNull::dangling());

        SCRIPT.with(|script| {
            script
                .borrow_mut()
                .push((7, CString::new("wl_compositor").unwrap(), 6))
        });

        let (compositor,) = conn.resolve::<(ffi::wl_compositor,)>().unwrap();
        // the script is drained and the registry proxy is destroyed by the
        // time resolve hands the handles back.
        assert!(SCRIPT.with(|script| script.borrow().is_empty()));
        assert_eq!(DESTROYED.with(Cell::get), 1);

        let compositor = compositor.unwrap();
        assert!(!compositor.as_ptr().is_null());
        drop(compositor);
        assert_eq!(DESTROYED.with(Cell::get), 2);

        // an idle barrier afterwards is a no-op, not a redelivery.
        conn.roundtrip().unwrap();
        assert_eq!(DESTROYED.with(Cell::get), 2);
    }

    #[test]
    fn transport_failure_fails_the_whole_resolution() {
        unsafe extern "C" fn failing_roundtrip(_display: *mut ffi::wl_display) -> c_int {
            -1
        }

        reset();
        let mut lib = scan_lib();
        lib.wl_display_roundtrip = failing_roundtrip;
        let conn = Connection::from_parts(lib, NonNull::dangling());

        let result = conn.resolve::<(ffi::wl_compositor,)>();
        assert!(matches!(result, Err(ConnectionError::Transport { .. })));
    }
}
