/// Declares a typed cache key of the form `resource:operation:identifier`.
///
/// ```ignore
/// cache_key!(EventDetailCacheKey::<Event> => "events":"detail"[id: Uuid]);
/// cache_key!(TrendingCacheKey::<TrendingResponse> => "trending":"feed":"global");
/// ```
///
/// Multiple arguments are joined with `:` to form the identifier.
#[macro_export]
macro_rules! cache_key {
    ($name:ident::<$t:ty> => $resource:literal:$operation:literal[$($arg:ident:$ty:ident),+]) => {
        #[doc=concat!("Cache key binding\n ## Key \n", $resource, ":", $operation, ":{", $(stringify!($arg), ",",)+ "}\n ## Value Type \n ", stringify!($t))]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            pub const OPERATION: &'static str = $operation;
            pub const RESOURCE: &'static str = $resource;
        }

        impl $crate::core::key::CacheKey for $name {
            type Args<'r> = ($(&'r $ty,)+);
            type Value = $t;

            fn get_key_with_args(&self, args: Self::Args<'_>) -> std::borrow::Cow<'static, str> {
                let ($($arg,)+) = args;
                let identifier = [$($arg.to_string()),+].join(":");

                $crate::codec::build_key($resource, $operation, identifier).into()
            }
        }
    };
    ($name:ident::<$t:ty> => $resource:literal:$operation:literal:$identifier:literal) => {
        #[doc=concat!("Cache key binding\n ## Key \n", $resource, ":", $operation, ":", $identifier, "\n ## Value Type \n ", stringify!($t))]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            pub const OPERATION: &'static str = $operation;
            pub const RESOURCE: &'static str = $resource;
        }

        impl $crate::core::key::CacheKey for $name {
            type Args<'r> = ();
            type Value = $t;

            fn get_key_with_args(&self, _: Self::Args<'_>) -> std::borrow::Cow<'static, str> {
                $crate::codec::build_key($resource, $operation, $identifier).into()
            }
        }
    };
}
