/// Declare the reactive store: the `Globals` struct, its constructor and
/// one accessor function per signal.
///
/// Usage:
/// `global_signals! {
///     pub name1: Type1 = initial1,
///     name2: Type2 = initial2,
/// }`
///
/// The invoking module must provide `fn globals() -> Globals`.
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident : $ty:ty = $init:expr ),+ $(,)? ) => {
        #[derive(Clone, Copy)]
        pub struct Globals {
            $( pub $name: ::leptos::RwSignal<$ty>, )+
        }

        impl Globals {
            fn new() -> Self {
                Self {
                    $( $name: ::leptos::create_rw_signal($init), )+
                }
            }
        }

        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                globals().$name
            }
        )+
    };
}
