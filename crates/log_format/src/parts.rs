use core::fmt::{self, Display, Write};

/// An ordered list of values forming the body of a log line.
///
/// Each value is written with its `Display` implementation, one after the
/// other, with nothing inserted in between. Implemented for `()` and for
/// tuples of up to twelve displayable values.
pub trait MessageParts {
    fn write_parts<W: Write + ?Sized>(&self, w: &mut W) -> fmt::Result;
}

impl MessageParts for () {
    fn write_parts<W: Write + ?Sized>(&self, _w: &mut W) -> fmt::Result {
        Ok(())
    }
}

macro_rules! impl_message_parts {
    ($($name:ident),+) => {
        impl<$($name: Display),+> MessageParts for ($($name,)+) {
            #[allow(non_snake_case)]
            fn write_parts<W: Write + ?Sized>(&self, w: &mut W) -> fmt::Result {
                let ($($name,)+) = self;
                $(write!(w, "{}", $name)?;)+
                Ok(())
            }
        }
    };
}

impl_message_parts!(A);
impl_message_parts!(A, B);
impl_message_parts!(A, B, C);
impl_message_parts!(A, B, C, D);
impl_message_parts!(A, B, C, D, E);
impl_message_parts!(A, B, C, D, E, F);
impl_message_parts!(A, B, C, D, E, F, G);
impl_message_parts!(A, B, C, D, E, F, G, H);
impl_message_parts!(A, B, C, D, E, F, G, H, I);
impl_message_parts!(A, B, C, D, E, F, G, H, I, J);
impl_message_parts!(A, B, C, D, E, F, G, H, I, J, K);
impl_message_parts!(A, B, C, D, E, F, G, H, I, J, K, L);
