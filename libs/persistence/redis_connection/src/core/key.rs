use std::borrow::Cow;

/// A cache key definition. The key string is derived from `Args`, the
/// cached payload type is fixed by `Value`.
pub trait CacheKey {
    type Args<'r>;
    type Value;

    fn get_key_with_args(&self, arg: Self::Args<'_>) -> Cow<'static, str>;

    fn get_key(&self) -> Cow<'static, str>
    where
        for<'r> Self::Args<'r>: CacheKeyAutoConstruct,
    {
        CacheKey::get_key_with_args(self, CacheKeyAutoConstruct::construct())
    }
}

pub trait CacheKeyAutoConstruct {
    fn construct() -> Self;
}

impl CacheKeyAutoConstruct for () {
    fn construct() -> Self {}
}
