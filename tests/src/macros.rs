/// Expands each test function into one `#[test]` per store backend.
///
/// Test functions take `&mut StoreTest`.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        mod file {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::StoreTest::new($crate::setup::SetupFile::new());
                    super::$f(&mut test);
                }
            )*
        }

        mod memory {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::StoreTest::new($crate::setup::SetupMemory::new());
                    super::$f(&mut test);
                }
            )*
        }
    };
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident,
        )+
    ) => {
        $crate::tests!( $(
            $( #[$attrs] )*
            $f
        ),+ );
    }
}
