use std::ffi::{CStr, c_void};
use std::mem::transmute_copy;
use std::ptr::NonNull;

use libc::{dlclose, dlerror, dlopen, dlsym};

#[derive(Debug, thiserror::Error)]
pub enum DynLibError {
    #[error("could not open {filename}: {reason}")]
    Open { filename: String, reason: String },
    #[error("could not resolve symbol {symbol}: {reason}")]
    Symbol { symbol: String, reason: String },
}

// dlerror's buffer is owned by libc, copy it out instead of taking it over.
fn take_dlerror() -> String {
    let err = unsafe { dlerror() };
    if err.is_null() {
        "unknown dl error".to_string()
    } else {
        unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned()
    }
}

pub struct DynLib(NonNull<c_void>);

impl DynLib {
    pub fn open(filename: &CStr) -> Result<Self, DynLibError> {
        let handle = unsafe { dlopen(filename.as_ptr(), libc::RTLD_LAZY) };
        match NonNull::new(handle) {
            Some(handle) => Ok(Self(handle)),
            None => Err(DynLibError::Open {
                filename: filename.to_string_lossy().into_owned(),
                reason: take_dlerror(),
            }),
        }
    }

    pub fn lookup<F: Sized>(&self, name: &CStr) -> Result<F, DynLibError> {
        unsafe {
            // clear any stale error; a null return alone is not conclusive.
            _ = dlerror();

            let addr = dlsym(self.0.as_ptr(), name.as_ptr());

            let err = dlerror();
            if err.is_null() {
                Ok(transmute_copy(&addr))
            } else {
                Err(DynLibError::Symbol {
                    symbol: name.to_string_lossy().into_owned(),
                    reason: CStr::from_ptr(err).to_string_lossy().into_owned(),
                })
            }
        }
    }
}

impl Drop for DynLib {
    fn drop(&mut self) {
        unsafe {
            dlclose(self.0.as_ptr());
        }
    }
}

#[macro_export]
macro_rules! opaque_struct {
    ($name:ident) => {
        #[repr(C)]
        pub struct $name {
            _data: [u8; 0],
            _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
        }
    };
}
