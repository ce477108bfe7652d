/// Returns the name of the given struct as a string literal, while asserting
/// at compile time that the type actually exists in scope.
#[macro_export]
macro_rules! struct_name {
    ($t:ty) => {{
        const _: fn() = || {
            let _ = core::marker::PhantomData::<$t>;
        };
        stringify!($t)
    }};
}
