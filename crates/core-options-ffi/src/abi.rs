// Names follow libretro.h so the layouts can be checked against the header.
#![allow(non_camel_case_types)]

use std::os::raw::{c_char, c_uint, c_void};
use std::ptr;

pub type retro_environment_t = unsafe extern "C" fn(cmd: c_uint, data: *mut c_void) -> bool;

pub const RETRO_ENVIRONMENT_GET_VARIABLE: c_uint = 15;
pub const RETRO_ENVIRONMENT_SET_VARIABLES: c_uint = 16;
pub const RETRO_ENVIRONMENT_GET_LANGUAGE: c_uint = 39;
pub const RETRO_ENVIRONMENT_GET_CORE_OPTIONS_VERSION: c_uint = 52;
pub const RETRO_ENVIRONMENT_SET_CORE_OPTIONS: c_uint = 53;
pub const RETRO_ENVIRONMENT_SET_CORE_OPTIONS_INTL: c_uint = 54;
pub const RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2: c_uint = 67;
pub const RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2_INTL: c_uint = 68;

/// Capacity of a definition's value array, terminator included.
pub const RETRO_NUM_CORE_OPTION_VALUES_MAX: usize = 128;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct retro_variable {
    pub key: *const c_char,
    pub value: *const c_char,
}

impl retro_variable {
    pub const TERMINATOR: Self = Self {
        key: ptr::null(),
        value: ptr::null(),
    };
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct retro_core_option_value {
    pub value: *const c_char,
    pub label: *const c_char,
}

impl retro_core_option_value {
    pub const TERMINATOR: Self = Self {
        value: ptr::null(),
        label: ptr::null(),
    };
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct retro_core_option_definition {
    pub key: *const c_char,
    pub desc: *const c_char,
    pub info: *const c_char,
    pub values: [retro_core_option_value; RETRO_NUM_CORE_OPTION_VALUES_MAX],
    pub default_value: *const c_char,
}

impl retro_core_option_definition {
    pub const TERMINATOR: Self = Self {
        key: ptr::null(),
        desc: ptr::null(),
        info: ptr::null(),
        values: [retro_core_option_value::TERMINATOR; RETRO_NUM_CORE_OPTION_VALUES_MAX],
        default_value: ptr::null(),
    };
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct retro_core_options_intl {
    pub us: *mut retro_core_option_definition,
    pub local: *mut retro_core_option_definition,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct retro_core_option_v2_category {
    pub key: *const c_char,
    pub desc: *const c_char,
    pub info: *const c_char,
}

impl retro_core_option_v2_category {
    pub const TERMINATOR: Self = Self {
        key: ptr::null(),
        desc: ptr::null(),
        info: ptr::null(),
    };
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct retro_core_option_v2_definition {
    pub key: *const c_char,
    pub desc: *const c_char,
    pub desc_categorized: *const c_char,
    pub info: *const c_char,
    pub info_categorized: *const c_char,
    pub category_key: *const c_char,
    pub values: [retro_core_option_value; RETRO_NUM_CORE_OPTION_VALUES_MAX],
    pub default_value: *const c_char,
}

impl retro_core_option_v2_definition {
    pub const TERMINATOR: Self = Self {
        key: ptr::null(),
        desc: ptr::null(),
        desc_categorized: ptr::null(),
        info: ptr::null(),
        info_categorized: ptr::null(),
        category_key: ptr::null(),
        values: [retro_core_option_value::TERMINATOR; RETRO_NUM_CORE_OPTION_VALUES_MAX],
        default_value: ptr::null(),
    };
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct retro_core_options_v2 {
    pub categories: *mut retro_core_option_v2_category,
    pub definitions: *mut retro_core_option_v2_definition,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct retro_core_options_v2_intl {
    pub us: *mut retro_core_options_v2,
    pub local: *mut retro_core_options_v2,
}
