#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

//! hand-maintained core-protocol and xdg-shell tables, laid out the way
//! wayland-scanner style generators emit them: one opaque proxy struct and
//! one listener struct per interface, `wl_message` arrays, an interface
//! static, and inline request stubs that marshal through `Lib`. opcodes are
//! message array indices, so every request and event is listed in protocol
//! order even when unused here.

// wl_display

#[repr(C)]
pub struct wl_display {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct wl_display_listener {
    pub error: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_display: *mut wl_display,
        object_id: *mut std::ffi::c_void,
        code: u32,
        message: *const std::ffi::c_char,
    ),
    pub delete_id: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_display: *mut wl_display,
        id: u32,
    ),
}

static wl_display_requests: [super::wl_message; 2] = [
    super::wl_message {
        name: c"sync".as_ptr(),
        signature: c"n".as_ptr(),
        types: [&wl_callback_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"get_registry".as_ptr(),
        signature: c"n".as_ptr(),
        types: [&wl_registry_interface as *const super::wl_interface].as_ptr(),
    },
];

static wl_display_events: [super::wl_message; 2] = [
    super::wl_message {
        name: c"error".as_ptr(),
        signature: c"ous".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"delete_id".as_ptr(),
        signature: c"u".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static wl_display_interface: super::wl_interface = super::wl_interface {
    name: c"wl_display".as_ptr(),
    version: 1,
    method_count: 2,
    methods: wl_display_requests.as_ptr(),
    event_count: 2,
    events: wl_display_events.as_ptr(),
};

const WL_DISPLAY_SYNC: u32 = 0;
const WL_DISPLAY_GET_REGISTRY: u32 = 1;

#[inline]
pub unsafe fn wl_display_sync(lib: &super::Lib, wl_display: *mut wl_display) -> *mut wl_callback {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_display as *mut super::wl_proxy,
            WL_DISPLAY_SYNC,
            &wl_callback_interface,
            (lib.wl_proxy_get_version)(wl_display as *mut super::wl_proxy),
            0,
            std::ptr::null::<std::ffi::c_void>(),
        ) as _
    }
}

#[inline]
pub unsafe fn wl_display_get_registry(
    lib: &super::Lib,
    wl_display: *mut wl_display,
) -> *mut wl_registry {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_display as *mut super::wl_proxy,
            WL_DISPLAY_GET_REGISTRY,
            &wl_registry_interface,
            (lib.wl_proxy_get_version)(wl_display as *mut super::wl_proxy),
            0,
            std::ptr::null::<std::ffi::c_void>(),
        ) as _
    }
}

// wl_callback

#[repr(C)]
pub struct wl_callback {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct wl_callback_listener {
    pub done: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_callback: *mut wl_callback,
        callback_data: u32,
    ),
}

static wl_callback_events: [super::wl_message; 1] = [super::wl_message {
    name: c"done".as_ptr(),
    signature: c"u".as_ptr(),
    types: std::ptr::null(),
}];

pub static wl_callback_interface: super::wl_interface = super::wl_interface {
    name: c"wl_callback".as_ptr(),
    version: 1,
    method_count: 0,
    methods: std::ptr::null(),
    event_count: 1,
    events: wl_callback_events.as_ptr(),
};

// wl_registry

#[repr(C)]
pub struct wl_registry {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct wl_registry_listener {
    pub global: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_registry: *mut wl_registry,
        name: u32,
        interface: *const std::ffi::c_char,
        version: u32,
    ),
    pub global_remove: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_registry: *mut wl_registry,
        name: u32,
    ),
}

static wl_registry_requests: [super::wl_message; 1] = [super::wl_message {
    name: c"bind".as_ptr(),
    signature: c"usun".as_ptr(),
    types: std::ptr::null(),
}];

static wl_registry_events: [super::wl_message; 2] = [
    super::wl_message {
        name: c"global".as_ptr(),
        signature: c"usu".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"global_remove".as_ptr(),
        signature: c"u".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static wl_registry_interface: super::wl_interface = super::wl_interface {
    name: c"wl_registry".as_ptr(),
    version: 1,
    method_count: 1,
    methods: wl_registry_requests.as_ptr(),
    event_count: 2,
    events: wl_registry_events.as_ptr(),
};

const WL_REGISTRY_BIND: u32 = 0;

#[inline]
pub unsafe fn wl_registry_bind(
    lib: &super::Lib,
    wl_registry: *mut wl_registry,
    name: u32,
    interface: *const super::wl_interface,
    version: u32,
) -> *mut std::ffi::c_void {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_registry as *mut super::wl_proxy,
            WL_REGISTRY_BIND,
            interface,
            version,
            0,
            name,
            (*interface).name,
            version,
            std::ptr::null::<std::ffi::c_void>(),
        ) as _
    }
}

// wl_compositor

#[repr(C)]
pub struct wl_compositor {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

static wl_compositor_requests: [super::wl_message; 2] = [
    super::wl_message {
        name: c"create_surface".as_ptr(),
        signature: c"n".as_ptr(),
        types: [&wl_surface_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"create_region".as_ptr(),
        signature: c"n".as_ptr(),
        types: [&wl_region_interface as *const super::wl_interface].as_ptr(),
    },
];

pub static wl_compositor_interface: super::wl_interface = super::wl_interface {
    name: c"wl_compositor".as_ptr(),
    version: 6,
    method_count: 2,
    methods: wl_compositor_requests.as_ptr(),
    event_count: 0,
    events: std::ptr::null(),
};

const WL_COMPOSITOR_CREATE_SURFACE: u32 = 0;

#[inline]
pub unsafe fn wl_compositor_create_surface(
    lib: &super::Lib,
    wl_compositor: *mut wl_compositor,
) -> *mut wl_surface {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_compositor as *mut super::wl_proxy,
            WL_COMPOSITOR_CREATE_SURFACE,
            &wl_surface_interface,
            (lib.wl_proxy_get_version)(wl_compositor as *mut super::wl_proxy),
            0,
            std::ptr::null::<std::ffi::c_void>(),
        ) as _
    }
}

// wl_region

#[repr(C)]
pub struct wl_region {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

static wl_region_requests: [super::wl_message; 3] = [
    super::wl_message {
        name: c"destroy".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"add".as_ptr(),
        signature: c"iiii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"subtract".as_ptr(),
        signature: c"iiii".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static wl_region_interface: super::wl_interface = super::wl_interface {
    name: c"wl_region".as_ptr(),
    version: 1,
    method_count: 3,
    methods: wl_region_requests.as_ptr(),
    event_count: 0,
    events: std::ptr::null(),
};

// wl_surface

#[repr(C)]
pub struct wl_surface {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct wl_surface_listener {
    pub enter: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_surface: *mut wl_surface,
        output: *mut wl_output,
    ),
    pub leave: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_surface: *mut wl_surface,
        output: *mut wl_output,
    ),
    pub preferred_buffer_scale: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_surface: *mut wl_surface,
        factor: i32,
    ),
    pub preferred_buffer_transform: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_surface: *mut wl_surface,
        transform: u32,
    ),
}

static wl_surface_requests: [super::wl_message; 11] = [
    super::wl_message {
        name: c"destroy".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"attach".as_ptr(),
        signature: c"?oii".as_ptr(),
        types: [
            &wl_buffer_interface as *const super::wl_interface,
            std::ptr::null(),
            std::ptr::null(),
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"damage".as_ptr(),
        signature: c"iiii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"frame".as_ptr(),
        signature: c"n".as_ptr(),
        types: [&wl_callback_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"set_opaque_region".as_ptr(),
        signature: c"?o".as_ptr(),
        types: [&wl_region_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"set_input_region".as_ptr(),
        signature: c"?o".as_ptr(),
        types: [&wl_region_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"commit".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_buffer_transform".as_ptr(),
        signature: c"2i".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_buffer_scale".as_ptr(),
        signature: c"3i".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"damage_buffer".as_ptr(),
        signature: c"4iiii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"offset".as_ptr(),
        signature: c"5ii".as_ptr(),
        types: std::ptr::null(),
    },
];

static wl_surface_events: [super::wl_message; 4] = [
    super::wl_message {
        name: c"enter".as_ptr(),
        signature: c"o".as_ptr(),
        types: [&wl_output_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"leave".as_ptr(),
        signature: c"o".as_ptr(),
        types: [&wl_output_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"preferred_buffer_scale".as_ptr(),
        signature: c"6i".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"preferred_buffer_transform".as_ptr(),
        signature: c"6u".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static wl_surface_interface: super::wl_interface = super::wl_interface {
    name: c"wl_surface".as_ptr(),
    version: 6,
    method_count: 11,
    methods: wl_surface_requests.as_ptr(),
    event_count: 4,
    events: wl_surface_events.as_ptr(),
};

const WL_SURFACE_DESTROY: u32 = 0;
const WL_SURFACE_ATTACH: u32 = 1;
const WL_SURFACE_DAMAGE: u32 = 2;
const WL_SURFACE_FRAME: u32 = 3;
const WL_SURFACE_COMMIT: u32 = 6;

#[inline]
pub unsafe fn wl_surface_destroy(lib: &super::Lib, wl_surface: *mut wl_surface) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_surface as *mut super::wl_proxy,
            WL_SURFACE_DESTROY,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(wl_surface as *mut super::wl_proxy),
            super::WL_MARSHAL_FLAG_DESTROY,
        );
    }
}

#[inline]
pub unsafe fn wl_surface_attach(
    lib: &super::Lib,
    wl_surface: *mut wl_surface,
    buffer: *mut wl_buffer,
    x: i32,
    y: i32,
) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_surface as *mut super::wl_proxy,
            WL_SURFACE_ATTACH,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(wl_surface as *mut super::wl_proxy),
            0,
            buffer,
            x,
            y,
        );
    }
}

#[inline]
pub unsafe fn wl_surface_damage(
    lib: &super::Lib,
    wl_surface: *mut wl_surface,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_surface as *mut super::wl_proxy,
            WL_SURFACE_DAMAGE,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(wl_surface as *mut super::wl_proxy),
            0,
            x,
            y,
            width,
            height,
        );
    }
}

#[inline]
pub unsafe fn wl_surface_frame(lib: &super::Lib, wl_surface: *mut wl_surface) -> *mut wl_callback {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_surface as *mut super::wl_proxy,
            WL_SURFACE_FRAME,
            &wl_callback_interface,
            (lib.wl_proxy_get_version)(wl_surface as *mut super::wl_proxy),
            0,
            std::ptr::null::<std::ffi::c_void>(),
        ) as _
    }
}

#[inline]
pub unsafe fn wl_surface_commit(lib: &super::Lib, wl_surface: *mut wl_surface) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_surface as *mut super::wl_proxy,
            WL_SURFACE_COMMIT,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(wl_surface as *mut super::wl_proxy),
            0,
        );
    }
}

// wl_output

#[repr(C)]
pub struct wl_output {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct wl_output_listener {
    pub geometry: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_output: *mut wl_output,
        x: i32,
        y: i32,
        physical_width: i32,
        physical_height: i32,
        subpixel: i32,
        make: *const std::ffi::c_char,
        model: *const std::ffi::c_char,
        transform: i32,
    ),
    pub mode: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_output: *mut wl_output,
        flags: u32,
        width: i32,
        height: i32,
        refresh: i32,
    ),
    pub done: unsafe extern "C" fn(data: *mut std::ffi::c_void, wl_output: *mut wl_output),
    pub scale: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_output: *mut wl_output,
        factor: i32,
    ),
    pub name: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_output: *mut wl_output,
        name: *const std::ffi::c_char,
    ),
    pub description: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_output: *mut wl_output,
        description: *const std::ffi::c_char,
    ),
}

static wl_output_requests: [super::wl_message; 1] = [super::wl_message {
    name: c"release".as_ptr(),
    signature: c"3".as_ptr(),
    types: std::ptr::null(),
}];

static wl_output_events: [super::wl_message; 6] = [
    super::wl_message {
        name: c"geometry".as_ptr(),
        signature: c"iiiiissi".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"mode".as_ptr(),
        signature: c"uiii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"done".as_ptr(),
        signature: c"2".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"scale".as_ptr(),
        signature: c"2i".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"name".as_ptr(),
        signature: c"4s".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"description".as_ptr(),
        signature: c"4s".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static wl_output_interface: super::wl_interface = super::wl_interface {
    name: c"wl_output".as_ptr(),
    version: 4,
    method_count: 1,
    methods: wl_output_requests.as_ptr(),
    event_count: 6,
    events: wl_output_events.as_ptr(),
};

// wl_shm

#[repr(C)]
pub struct wl_shm {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct wl_shm_listener {
    pub format:
        unsafe extern "C" fn(data: *mut std::ffi::c_void, wl_shm: *mut wl_shm, format: u32),
}

static wl_shm_requests: [super::wl_message; 2] = [
    super::wl_message {
        name: c"create_pool".as_ptr(),
        signature: c"nhi".as_ptr(),
        types: [
            &wl_shm_pool_interface as *const super::wl_interface,
            std::ptr::null(),
            std::ptr::null(),
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"release".as_ptr(),
        signature: c"2".as_ptr(),
        types: std::ptr::null(),
    },
];

static wl_shm_events: [super::wl_message; 1] = [super::wl_message {
    name: c"format".as_ptr(),
    signature: c"u".as_ptr(),
    types: std::ptr::null(),
}];

pub static wl_shm_interface: super::wl_interface = super::wl_interface {
    name: c"wl_shm".as_ptr(),
    version: 2,
    method_count: 2,
    methods: wl_shm_requests.as_ptr(),
    event_count: 1,
    events: wl_shm_events.as_ptr(),
};

pub const WL_SHM_FORMAT_ARGB8888: u32 = 0;
pub const WL_SHM_FORMAT_XRGB8888: u32 = 1;

const WL_SHM_CREATE_POOL: u32 = 0;

#[inline]
pub unsafe fn wl_shm_create_pool(
    lib: &super::Lib,
    wl_shm: *mut wl_shm,
    fd: i32,
    size: i32,
) -> *mut wl_shm_pool {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_shm as *mut super::wl_proxy,
            WL_SHM_CREATE_POOL,
            &wl_shm_pool_interface,
            (lib.wl_proxy_get_version)(wl_shm as *mut super::wl_proxy),
            0,
            std::ptr::null::<std::ffi::c_void>(),
            fd,
            size,
        ) as _
    }
}

// wl_shm_pool

#[repr(C)]
pub struct wl_shm_pool {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

static wl_shm_pool_requests: [super::wl_message; 3] = [
    super::wl_message {
        name: c"create_buffer".as_ptr(),
        signature: c"niiiiu".as_ptr(),
        types: [
            &wl_buffer_interface as *const super::wl_interface,
            std::ptr::null(),
            std::ptr::null(),
            std::ptr::null(),
            std::ptr::null(),
            std::ptr::null(),
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"destroy".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"resize".as_ptr(),
        signature: c"i".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static wl_shm_pool_interface: super::wl_interface = super::wl_interface {
    name: c"wl_shm_pool".as_ptr(),
    version: 2,
    method_count: 3,
    methods: wl_shm_pool_requests.as_ptr(),
    event_count: 0,
    events: std::ptr::null(),
};

const WL_SHM_POOL_CREATE_BUFFER: u32 = 0;
const WL_SHM_POOL_DESTROY: u32 = 1;

#[inline]
pub unsafe fn wl_shm_pool_create_buffer(
    lib: &super::Lib,
    wl_shm_pool: *mut wl_shm_pool,
    offset: i32,
    width: i32,
    height: i32,
    stride: i32,
    format: u32,
) -> *mut wl_buffer {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_shm_pool as *mut super::wl_proxy,
            WL_SHM_POOL_CREATE_BUFFER,
            &wl_buffer_interface,
            (lib.wl_proxy_get_version)(wl_shm_pool as *mut super::wl_proxy),
            0,
            std::ptr::null::<std::ffi::c_void>(),
            offset,
            width,
            height,
            stride,
            format,
        ) as _
    }
}

#[inline]
pub unsafe fn wl_shm_pool_destroy(lib: &super::Lib, wl_shm_pool: *mut wl_shm_pool) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_shm_pool as *mut super::wl_proxy,
            WL_SHM_POOL_DESTROY,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(wl_shm_pool as *mut super::wl_proxy),
            super::WL_MARSHAL_FLAG_DESTROY,
        );
    }
}

// wl_buffer

#[repr(C)]
pub struct wl_buffer {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct wl_buffer_listener {
    pub release: unsafe extern "C" fn(data: *mut std::ffi::c_void, wl_buffer: *mut wl_buffer),
}

static wl_buffer_requests: [super::wl_message; 1] = [super::wl_message {
    name: c"destroy".as_ptr(),
    signature: c"".as_ptr(),
    types: std::ptr::null(),
}];

static wl_buffer_events: [super::wl_message; 1] = [super::wl_message {
    name: c"release".as_ptr(),
    signature: c"".as_ptr(),
    types: std::ptr::null(),
}];

pub static wl_buffer_interface: super::wl_interface = super::wl_interface {
    name: c"wl_buffer".as_ptr(),
    version: 1,
    method_count: 1,
    methods: wl_buffer_requests.as_ptr(),
    event_count: 1,
    events: wl_buffer_events.as_ptr(),
};

const WL_BUFFER_DESTROY: u32 = 0;

#[inline]
pub unsafe fn wl_buffer_destroy(lib: &super::Lib, wl_buffer: *mut wl_buffer) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_buffer as *mut super::wl_proxy,
            WL_BUFFER_DESTROY,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(wl_buffer as *mut super::wl_proxy),
            super::WL_MARSHAL_FLAG_DESTROY,
        );
    }
}

// wl_seat

#[repr(C)]
pub struct wl_seat {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct wl_seat_listener {
    pub capabilities: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_seat: *mut wl_seat,
        capabilities: u32,
    ),
    pub name: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_seat: *mut wl_seat,
        name: *const std::ffi::c_char,
    ),
}

static wl_seat_requests: [super::wl_message; 4] = [
    super::wl_message {
        name: c"get_pointer".as_ptr(),
        signature: c"n".as_ptr(),
        types: [&wl_pointer_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"get_keyboard".as_ptr(),
        signature: c"n".as_ptr(),
        types: [&wl_keyboard_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"get_touch".as_ptr(),
        signature: c"n".as_ptr(),
        types: [&wl_touch_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"release".as_ptr(),
        signature: c"5".as_ptr(),
        types: std::ptr::null(),
    },
];

static wl_seat_events: [super::wl_message; 2] = [
    super::wl_message {
        name: c"capabilities".as_ptr(),
        signature: c"u".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"name".as_ptr(),
        signature: c"2s".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static wl_seat_interface: super::wl_interface = super::wl_interface {
    name: c"wl_seat".as_ptr(),
    version: 9,
    method_count: 4,
    methods: wl_seat_requests.as_ptr(),
    event_count: 2,
    events: wl_seat_events.as_ptr(),
};

pub const WL_SEAT_CAPABILITY_POINTER: u32 = 1;
pub const WL_SEAT_CAPABILITY_KEYBOARD: u32 = 2;
pub const WL_SEAT_CAPABILITY_TOUCH: u32 = 4;

const WL_SEAT_GET_POINTER: u32 = 0;
const WL_SEAT_GET_KEYBOARD: u32 = 1;
const WL_SEAT_GET_TOUCH: u32 = 2;
const WL_SEAT_RELEASE: u32 = 3;

#[inline]
pub unsafe fn wl_seat_get_pointer(lib: &super::Lib, wl_seat: *mut wl_seat) -> *mut wl_pointer {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_seat as *mut super::wl_proxy,
            WL_SEAT_GET_POINTER,
            &wl_pointer_interface,
            (lib.wl_proxy_get_version)(wl_seat as *mut super::wl_proxy),
            0,
            std::ptr::null::<std::ffi::c_void>(),
        ) as _
    }
}

#[inline]
pub unsafe fn wl_seat_get_keyboard(lib: &super::Lib, wl_seat: *mut wl_seat) -> *mut wl_keyboard {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_seat as *mut super::wl_proxy,
            WL_SEAT_GET_KEYBOARD,
            &wl_keyboard_interface,
            (lib.wl_proxy_get_version)(wl_seat as *mut super::wl_proxy),
            0,
            std::ptr::null::<std::ffi::c_void>(),
        ) as _
    }
}

#[inline]
pub unsafe fn wl_seat_get_touch(lib: &super::Lib, wl_seat: *mut wl_seat) -> *mut wl_touch {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_seat as *mut super::wl_proxy,
            WL_SEAT_GET_TOUCH,
            &wl_touch_interface,
            (lib.wl_proxy_get_version)(wl_seat as *mut super::wl_proxy),
            0,
            std::ptr::null::<std::ffi::c_void>(),
        ) as _
    }
}

#[inline]
pub unsafe fn wl_seat_release(lib: &super::Lib, wl_seat: *mut wl_seat) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_seat as *mut super::wl_proxy,
            WL_SEAT_RELEASE,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(wl_seat as *mut super::wl_proxy),
            super::WL_MARSHAL_FLAG_DESTROY,
        );
    }
}

// wl_keyboard

#[repr(C)]
pub struct wl_keyboard {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct wl_keyboard_listener {
    pub keymap: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_keyboard: *mut wl_keyboard,
        format: u32,
        fd: i32,
        size: u32,
    ),
    pub enter: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_keyboard: *mut wl_keyboard,
        serial: u32,
        surface: *mut wl_surface,
        keys: *mut super::wl_array,
    ),
    pub leave: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_keyboard: *mut wl_keyboard,
        serial: u32,
        surface: *mut wl_surface,
    ),
    pub key: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_keyboard: *mut wl_keyboard,
        serial: u32,
        time: u32,
        key: u32,
        state: u32,
    ),
    pub modifiers: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_keyboard: *mut wl_keyboard,
        serial: u32,
        mods_depressed: u32,
        mods_latched: u32,
        mods_locked: u32,
        group: u32,
    ),
    pub repeat_info: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_keyboard: *mut wl_keyboard,
        rate: i32,
        delay: i32,
    ),
}

static wl_keyboard_requests: [super::wl_message; 1] = [super::wl_message {
    name: c"release".as_ptr(),
    signature: c"3".as_ptr(),
    types: std::ptr::null(),
}];

static wl_keyboard_events: [super::wl_message; 6] = [
    super::wl_message {
        name: c"keymap".as_ptr(),
        signature: c"uhu".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"enter".as_ptr(),
        signature: c"uoa".as_ptr(),
        types: [
            std::ptr::null(),
            &wl_surface_interface as *const super::wl_interface,
            std::ptr::null(),
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"leave".as_ptr(),
        signature: c"uo".as_ptr(),
        types: [
            std::ptr::null(),
            &wl_surface_interface as *const super::wl_interface,
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"key".as_ptr(),
        signature: c"uuuu".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"modifiers".as_ptr(),
        signature: c"uuuuu".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"repeat_info".as_ptr(),
        signature: c"4ii".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static wl_keyboard_interface: super::wl_interface = super::wl_interface {
    name: c"wl_keyboard".as_ptr(),
    version: 9,
    method_count: 1,
    methods: wl_keyboard_requests.as_ptr(),
    event_count: 6,
    events: wl_keyboard_events.as_ptr(),
};

pub const WL_KEYBOARD_KEY_STATE_RELEASED: u32 = 0;
pub const WL_KEYBOARD_KEY_STATE_PRESSED: u32 = 1;

const WL_KEYBOARD_RELEASE: u32 = 0;

#[inline]
pub unsafe fn wl_keyboard_release(lib: &super::Lib, wl_keyboard: *mut wl_keyboard) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_keyboard as *mut super::wl_proxy,
            WL_KEYBOARD_RELEASE,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(wl_keyboard as *mut super::wl_proxy),
            super::WL_MARSHAL_FLAG_DESTROY,
        );
    }
}

// wl_pointer

#[repr(C)]
pub struct wl_pointer {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct wl_pointer_listener {
    pub enter: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_pointer: *mut wl_pointer,
        serial: u32,
        surface: *mut wl_surface,
        surface_x: super::wl_fixed,
        surface_y: super::wl_fixed,
    ),
    pub leave: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_pointer: *mut wl_pointer,
        serial: u32,
        surface: *mut wl_surface,
    ),
    pub motion: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_pointer: *mut wl_pointer,
        time: u32,
        surface_x: super::wl_fixed,
        surface_y: super::wl_fixed,
    ),
    pub button: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_pointer: *mut wl_pointer,
        serial: u32,
        time: u32,
        button: u32,
        state: u32,
    ),
    pub axis: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_pointer: *mut wl_pointer,
        time: u32,
        axis: u32,
        value: super::wl_fixed,
    ),
    pub frame: unsafe extern "C" fn(data: *mut std::ffi::c_void, wl_pointer: *mut wl_pointer),
    pub axis_source: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_pointer: *mut wl_pointer,
        axis_source: u32,
    ),
    pub axis_stop: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_pointer: *mut wl_pointer,
        time: u32,
        axis: u32,
    ),
    pub axis_discrete: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_pointer: *mut wl_pointer,
        axis: u32,
        discrete: i32,
    ),
    pub axis_value120: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_pointer: *mut wl_pointer,
        axis: u32,
        value120: i32,
    ),
    pub axis_relative_direction: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_pointer: *mut wl_pointer,
        axis: u32,
        direction: u32,
    ),
}

static wl_pointer_requests: [super::wl_message; 2] = [
    super::wl_message {
        name: c"set_cursor".as_ptr(),
        signature: c"u?oii".as_ptr(),
        types: [
            std::ptr::null(),
            &wl_surface_interface as *const super::wl_interface,
            std::ptr::null(),
            std::ptr::null(),
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"release".as_ptr(),
        signature: c"3".as_ptr(),
        types: std::ptr::null(),
    },
];

static wl_pointer_events: [super::wl_message; 11] = [
    super::wl_message {
        name: c"enter".as_ptr(),
        signature: c"uoff".as_ptr(),
        types: [
            std::ptr::null(),
            &wl_surface_interface as *const super::wl_interface,
            std::ptr::null(),
            std::ptr::null(),
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"leave".as_ptr(),
        signature: c"uo".as_ptr(),
        types: [
            std::ptr::null(),
            &wl_surface_interface as *const super::wl_interface,
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"motion".as_ptr(),
        signature: c"uff".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"button".as_ptr(),
        signature: c"uuuu".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"axis".as_ptr(),
        signature: c"uf".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"frame".as_ptr(),
        signature: c"5".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"axis_source".as_ptr(),
        signature: c"5u".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"axis_stop".as_ptr(),
        signature: c"5uu".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"axis_discrete".as_ptr(),
        signature: c"5ui".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"axis_value120".as_ptr(),
        signature: c"8ui".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"axis_relative_direction".as_ptr(),
        signature: c"9uu".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static wl_pointer_interface: super::wl_interface = super::wl_interface {
    name: c"wl_pointer".as_ptr(),
    version: 9,
    method_count: 2,
    methods: wl_pointer_requests.as_ptr(),
    event_count: 11,
    events: wl_pointer_events.as_ptr(),
};

pub const WL_POINTER_BUTTON_STATE_RELEASED: u32 = 0;
pub const WL_POINTER_BUTTON_STATE_PRESSED: u32 = 1;

const WL_POINTER_RELEASE: u32 = 1;

#[inline]
pub unsafe fn wl_pointer_release(lib: &super::Lib, wl_pointer: *mut wl_pointer) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_pointer as *mut super::wl_proxy,
            WL_POINTER_RELEASE,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(wl_pointer as *mut super::wl_proxy),
            super::WL_MARSHAL_FLAG_DESTROY,
        );
    }
}

// wl_touch

#[repr(C)]
pub struct wl_touch {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct wl_touch_listener {
    pub down: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_touch: *mut wl_touch,
        serial: u32,
        time: u32,
        surface: *mut wl_surface,
        id: i32,
        x: super::wl_fixed,
        y: super::wl_fixed,
    ),
    pub up: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_touch: *mut wl_touch,
        serial: u32,
        time: u32,
        id: i32,
    ),
    pub motion: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_touch: *mut wl_touch,
        time: u32,
        id: i32,
        x: super::wl_fixed,
        y: super::wl_fixed,
    ),
    pub frame: unsafe extern "C" fn(data: *mut std::ffi::c_void, wl_touch: *mut wl_touch),
    pub cancel: unsafe extern "C" fn(data: *mut std::ffi::c_void, wl_touch: *mut wl_touch),
    pub shape: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_touch: *mut wl_touch,
        id: i32,
        major: super::wl_fixed,
        minor: super::wl_fixed,
    ),
    pub orientation: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        wl_touch: *mut wl_touch,
        id: i32,
        orientation: super::wl_fixed,
    ),
}

static wl_touch_requests: [super::wl_message; 1] = [super::wl_message {
    name: c"release".as_ptr(),
    signature: c"3".as_ptr(),
    types: std::ptr::null(),
}];

static wl_touch_events: [super::wl_message; 7] = [
    super::wl_message {
        name: c"down".as_ptr(),
        signature: c"uuoiff".as_ptr(),
        types: [
            std::ptr::null(),
            std::ptr::null(),
            &wl_surface_interface as *const super::wl_interface,
            std::ptr::null(),
            std::ptr::null(),
            std::ptr::null(),
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"up".as_ptr(),
        signature: c"uui".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"motion".as_ptr(),
        signature: c"uiff".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"frame".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"cancel".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"shape".as_ptr(),
        signature: c"6iff".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"orientation".as_ptr(),
        signature: c"6if".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static wl_touch_interface: super::wl_interface = super::wl_interface {
    name: c"wl_touch".as_ptr(),
    version: 9,
    method_count: 1,
    methods: wl_touch_requests.as_ptr(),
    event_count: 7,
    events: wl_touch_events.as_ptr(),
};

const WL_TOUCH_RELEASE: u32 = 0;

#[inline]
pub unsafe fn wl_touch_release(lib: &super::Lib, wl_touch: *mut wl_touch) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            wl_touch as *mut super::wl_proxy,
            WL_TOUCH_RELEASE,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(wl_touch as *mut super::wl_proxy),
            super::WL_MARSHAL_FLAG_DESTROY,
        );
    }
}

// xdg_wm_base

#[repr(C)]
pub struct xdg_wm_base {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct xdg_wm_base_listener {
    pub ping: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        xdg_wm_base: *mut xdg_wm_base,
        serial: u32,
    ),
}

static xdg_wm_base_requests: [super::wl_message; 4] = [
    super::wl_message {
        name: c"destroy".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"create_positioner".as_ptr(),
        signature: c"n".as_ptr(),
        types: [&xdg_positioner_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"get_xdg_surface".as_ptr(),
        signature: c"no".as_ptr(),
        types: [
            &xdg_surface_interface as *const super::wl_interface,
            &wl_surface_interface as *const super::wl_interface,
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"pong".as_ptr(),
        signature: c"u".as_ptr(),
        types: std::ptr::null(),
    },
];

static xdg_wm_base_events: [super::wl_message; 1] = [super::wl_message {
    name: c"ping".as_ptr(),
    signature: c"u".as_ptr(),
    types: std::ptr::null(),
}];

pub static xdg_wm_base_interface: super::wl_interface = super::wl_interface {
    name: c"xdg_wm_base".as_ptr(),
    version: 6,
    method_count: 4,
    methods: xdg_wm_base_requests.as_ptr(),
    event_count: 1,
    events: xdg_wm_base_events.as_ptr(),
};

const XDG_WM_BASE_DESTROY: u32 = 0;
const XDG_WM_BASE_GET_XDG_SURFACE: u32 = 2;
const XDG_WM_BASE_PONG: u32 = 3;

#[inline]
pub unsafe fn xdg_wm_base_destroy(lib: &super::Lib, xdg_wm_base: *mut xdg_wm_base) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            xdg_wm_base as *mut super::wl_proxy,
            XDG_WM_BASE_DESTROY,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(xdg_wm_base as *mut super::wl_proxy),
            super::WL_MARSHAL_FLAG_DESTROY,
        );
    }
}

#[inline]
pub unsafe fn xdg_wm_base_get_xdg_surface(
    lib: &super::Lib,
    xdg_wm_base: *mut xdg_wm_base,
    surface: *mut wl_surface,
) -> *mut xdg_surface {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            xdg_wm_base as *mut super::wl_proxy,
            XDG_WM_BASE_GET_XDG_SURFACE,
            &xdg_surface_interface,
            (lib.wl_proxy_get_version)(xdg_wm_base as *mut super::wl_proxy),
            0,
            std::ptr::null::<std::ffi::c_void>(),
            surface,
        ) as _
    }
}

#[inline]
pub unsafe fn xdg_wm_base_pong(lib: &super::Lib, xdg_wm_base: *mut xdg_wm_base, serial: u32) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            xdg_wm_base as *mut super::wl_proxy,
            XDG_WM_BASE_PONG,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(xdg_wm_base as *mut super::wl_proxy),
            0,
            serial,
        );
    }
}

// xdg_positioner

#[repr(C)]
pub struct xdg_positioner {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

static xdg_positioner_requests: [super::wl_message; 10] = [
    super::wl_message {
        name: c"destroy".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_size".as_ptr(),
        signature: c"ii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_anchor_rect".as_ptr(),
        signature: c"iiii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_anchor".as_ptr(),
        signature: c"u".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_gravity".as_ptr(),
        signature: c"u".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_constraint_adjustment".as_ptr(),
        signature: c"u".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_offset".as_ptr(),
        signature: c"ii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_reactive".as_ptr(),
        signature: c"3".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_parent_size".as_ptr(),
        signature: c"3ii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_parent_configure".as_ptr(),
        signature: c"3u".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static xdg_positioner_interface: super::wl_interface = super::wl_interface {
    name: c"xdg_positioner".as_ptr(),
    version: 6,
    method_count: 10,
    methods: xdg_positioner_requests.as_ptr(),
    event_count: 0,
    events: std::ptr::null(),
};

// xdg_surface

#[repr(C)]
pub struct xdg_surface {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct xdg_surface_listener {
    pub configure: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        xdg_surface: *mut xdg_surface,
        serial: u32,
    ),
}

static xdg_surface_requests: [super::wl_message; 5] = [
    super::wl_message {
        name: c"destroy".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"get_toplevel".as_ptr(),
        signature: c"n".as_ptr(),
        types: [&xdg_toplevel_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"get_popup".as_ptr(),
        signature: c"n?oo".as_ptr(),
        types: [
            &xdg_popup_interface as *const super::wl_interface,
            &xdg_surface_interface as *const super::wl_interface,
            &xdg_positioner_interface as *const super::wl_interface,
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"set_window_geometry".as_ptr(),
        signature: c"iiii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"ack_configure".as_ptr(),
        signature: c"u".as_ptr(),
        types: std::ptr::null(),
    },
];

static xdg_surface_events: [super::wl_message; 1] = [super::wl_message {
    name: c"configure".as_ptr(),
    signature: c"u".as_ptr(),
    types: std::ptr::null(),
}];

pub static xdg_surface_interface: super::wl_interface = super::wl_interface {
    name: c"xdg_surface".as_ptr(),
    version: 6,
    method_count: 5,
    methods: xdg_surface_requests.as_ptr(),
    event_count: 1,
    events: xdg_surface_events.as_ptr(),
};

const XDG_SURFACE_DESTROY: u32 = 0;
const XDG_SURFACE_GET_TOPLEVEL: u32 = 1;
const XDG_SURFACE_ACK_CONFIGURE: u32 = 4;

#[inline]
pub unsafe fn xdg_surface_destroy(lib: &super::Lib, xdg_surface: *mut xdg_surface) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            xdg_surface as *mut super::wl_proxy,
            XDG_SURFACE_DESTROY,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(xdg_surface as *mut super::wl_proxy),
            super::WL_MARSHAL_FLAG_DESTROY,
        );
    }
}

#[inline]
pub unsafe fn xdg_surface_get_toplevel(
    lib: &super::Lib,
    xdg_surface: *mut xdg_surface,
) -> *mut xdg_toplevel {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            xdg_surface as *mut super::wl_proxy,
            XDG_SURFACE_GET_TOPLEVEL,
            &xdg_toplevel_interface,
            (lib.wl_proxy_get_version)(xdg_surface as *mut super::wl_proxy),
            0,
            std::ptr::null::<std::ffi::c_void>(),
        ) as _
    }
}

#[inline]
pub unsafe fn xdg_surface_ack_configure(
    lib: &super::Lib,
    xdg_surface: *mut xdg_surface,
    serial: u32,
) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            xdg_surface as *mut super::wl_proxy,
            XDG_SURFACE_ACK_CONFIGURE,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(xdg_surface as *mut super::wl_proxy),
            0,
            serial,
        );
    }
}

// xdg_toplevel

#[repr(C)]
pub struct xdg_toplevel {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct xdg_toplevel_listener {
    pub configure: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        xdg_toplevel: *mut xdg_toplevel,
        width: i32,
        height: i32,
        states: *mut super::wl_array,
    ),
    pub close: unsafe extern "C" fn(data: *mut std::ffi::c_void, xdg_toplevel: *mut xdg_toplevel),
    pub configure_bounds: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        xdg_toplevel: *mut xdg_toplevel,
        width: i32,
        height: i32,
    ),
    pub wm_capabilities: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        xdg_toplevel: *mut xdg_toplevel,
        capabilities: *mut super::wl_array,
    ),
}

static xdg_toplevel_requests: [super::wl_message; 14] = [
    super::wl_message {
        name: c"destroy".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_parent".as_ptr(),
        signature: c"?o".as_ptr(),
        types: [&xdg_toplevel_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"set_title".as_ptr(),
        signature: c"s".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_app_id".as_ptr(),
        signature: c"s".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"show_window_menu".as_ptr(),
        signature: c"ouii".as_ptr(),
        types: [
            &wl_seat_interface as *const super::wl_interface,
            std::ptr::null(),
            std::ptr::null(),
            std::ptr::null(),
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"move".as_ptr(),
        signature: c"ou".as_ptr(),
        types: [
            &wl_seat_interface as *const super::wl_interface,
            std::ptr::null(),
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"resize".as_ptr(),
        signature: c"ouu".as_ptr(),
        types: [
            &wl_seat_interface as *const super::wl_interface,
            std::ptr::null(),
            std::ptr::null(),
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"set_max_size".as_ptr(),
        signature: c"ii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_min_size".as_ptr(),
        signature: c"ii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_maximized".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"unset_maximized".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_fullscreen".as_ptr(),
        signature: c"?o".as_ptr(),
        types: [&wl_output_interface as *const super::wl_interface].as_ptr(),
    },
    super::wl_message {
        name: c"unset_fullscreen".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"set_minimized".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
];

static xdg_toplevel_events: [super::wl_message; 4] = [
    super::wl_message {
        name: c"configure".as_ptr(),
        signature: c"iia".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"close".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"configure_bounds".as_ptr(),
        signature: c"4ii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"wm_capabilities".as_ptr(),
        signature: c"5a".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static xdg_toplevel_interface: super::wl_interface = super::wl_interface {
    name: c"xdg_toplevel".as_ptr(),
    version: 6,
    method_count: 14,
    methods: xdg_toplevel_requests.as_ptr(),
    event_count: 4,
    events: xdg_toplevel_events.as_ptr(),
};

const XDG_TOPLEVEL_DESTROY: u32 = 0;
const XDG_TOPLEVEL_SET_TITLE: u32 = 2;
const XDG_TOPLEVEL_SET_APP_ID: u32 = 3;

#[inline]
pub unsafe fn xdg_toplevel_destroy(lib: &super::Lib, xdg_toplevel: *mut xdg_toplevel) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            xdg_toplevel as *mut super::wl_proxy,
            XDG_TOPLEVEL_DESTROY,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(xdg_toplevel as *mut super::wl_proxy),
            super::WL_MARSHAL_FLAG_DESTROY,
        );
    }
}

#[inline]
pub unsafe fn xdg_toplevel_set_title(
    lib: &super::Lib,
    xdg_toplevel: *mut xdg_toplevel,
    title: *const std::ffi::c_char,
) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            xdg_toplevel as *mut super::wl_proxy,
            XDG_TOPLEVEL_SET_TITLE,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(xdg_toplevel as *mut super::wl_proxy),
            0,
            title,
        );
    }
}

#[inline]
pub unsafe fn xdg_toplevel_set_app_id(
    lib: &super::Lib,
    xdg_toplevel: *mut xdg_toplevel,
    app_id: *const std::ffi::c_char,
) {
    unsafe {
        (lib.wl_proxy_marshal_flags)(
            xdg_toplevel as *mut super::wl_proxy,
            XDG_TOPLEVEL_SET_APP_ID,
            std::ptr::null(),
            (lib.wl_proxy_get_version)(xdg_toplevel as *mut super::wl_proxy),
            0,
            app_id,
        );
    }
}

// xdg_popup

#[repr(C)]
pub struct xdg_popup {
    _data: [u8; 0],
    _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

pub struct xdg_popup_listener {
    pub configure: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        xdg_popup: *mut xdg_popup,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ),
    pub popup_done: unsafe extern "C" fn(data: *mut std::ffi::c_void, xdg_popup: *mut xdg_popup),
    pub repositioned: unsafe extern "C" fn(
        data: *mut std::ffi::c_void,
        xdg_popup: *mut xdg_popup,
        token: u32,
    ),
}

static xdg_popup_requests: [super::wl_message; 3] = [
    super::wl_message {
        name: c"destroy".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"grab".as_ptr(),
        signature: c"ou".as_ptr(),
        types: [
            &wl_seat_interface as *const super::wl_interface,
            std::ptr::null(),
        ]
        .as_ptr(),
    },
    super::wl_message {
        name: c"reposition".as_ptr(),
        signature: c"3ou".as_ptr(),
        types: [
            &xdg_positioner_interface as *const super::wl_interface,
            std::ptr::null(),
        ]
        .as_ptr(),
    },
];

static xdg_popup_events: [super::wl_message; 3] = [
    super::wl_message {
        name: c"configure".as_ptr(),
        signature: c"iiii".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"popup_done".as_ptr(),
        signature: c"".as_ptr(),
        types: std::ptr::null(),
    },
    super::wl_message {
        name: c"repositioned".as_ptr(),
        signature: c"3u".as_ptr(),
        types: std::ptr::null(),
    },
];

pub static xdg_popup_interface: super::wl_interface = super::wl_interface {
    name: c"xdg_popup".as_ptr(),
    version: 6,
    method_count: 3,
    methods: xdg_popup_requests.as_ptr(),
    event_count: 3,
    events: xdg_popup_events.as_ptr(),
};
