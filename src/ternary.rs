/// A one-line conditional expression.  `cargo fmt` spreads an `if`
/// expression over five lines, and the clipping rules at the ends of a
/// seam stage read much better as `cq!(p == 0, 0, p - 1)`.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
