/// Asserts that running `$run` panics, catching the panic so the test can continue.
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| -> () { $run }).is_err(), $msg);
    };
}

pub(crate) use assert_panics;
