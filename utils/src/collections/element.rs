use std::fmt::Debug;

/// Marker for values that can travel through the queues in this crate.
pub trait Element: Debug + Clone + Send + Sync + 'static {}

impl Element for i8 {}
impl Element for i16 {}
impl Element for i32 {}
impl Element for i64 {}
impl Element for u8 {}
impl Element for u16 {}
impl Element for u32 {}
impl Element for u64 {}
impl Element for usize {}
impl Element for bool {}
impl Element for String {}
impl Element for &'static str {}
