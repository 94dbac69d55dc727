/// Converts any `Debug` value into a `String`, used to carry third party
/// errors (HTTP, JSON) inside our own error variants.
///
/// ```diff
/// -format!("{:?}", err)
/// +err.to_debug_string()
/// ```
pub trait ToDebugString {
    fn to_debug_string(&self) -> String;
}
impl<T: core::fmt::Debug> ToDebugString for T {
    fn to_debug_string(&self) -> String {
        format!("{self:?}")
    }
}
