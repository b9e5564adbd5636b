use crate::prelude::Coercible;

macro_rules! coercible_from_str {
    ($($t:ty),*) => {
        $(
            impl Coercible for $t {
                fn coerce(token: &str) -> Option<Self> {
                    token.parse::<$t>().ok()
                }
            }
        )*
    };
}

coercible_from_str!(i32, i64, f32, f64);

impl Coercible for String {
    fn coerce(token: &str) -> Option<Self> {
        Some(token.to_string())
    }
}

impl Coercible for bool {
    fn coerce(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("true") {
            Some(true)
        } else if token.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}
