// bool, u8 - u64, i8 - i64, f32, f64, usize, isize
mod native_basic;

// ()
mod native_unit;

// &'static str
mod native_str;

// &'static T
mod native_ref;
