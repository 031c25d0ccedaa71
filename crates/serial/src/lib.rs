#![cfg_attr(not(test), no_std)]

use core::fmt;

/// A device register that accepts one byte at a time.
pub trait BytePort {
    fn write_byte(&mut self, byte: u8);
}

/// Text writer on top of a byte port.
///
/// Only ASCII goes over the wire, every other character is sent as `?`.
pub struct SerialWriter<P> {
    port: P,
}

impl<P: BytePort> SerialWriter<P> {
    pub const fn new(port: P) -> Self {
        Self { port }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_port(self) -> P {
        self.port
    }
}

impl<P: BytePort> fmt::Write for SerialWriter<P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.write_char(c)?;
        }

        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        let byte = if c.is_ascii() { c as u8 } else { b'?' };
        self.port.write_byte(byte);
        Ok(())
    }
}

#[cfg(feature = "x86-port")]
pub use com1::{Com1, COM1_WRITER};

#[cfg(feature = "x86-port")]
mod com1 {
    use spin::Mutex;
    use x86::io::outb;

    use crate::{BytePort, SerialWriter};

    const COM1_ADDR: u16 = 0x3F8;

    // This struct is used so no one can create a `Com1` from
    // outside this crate without going through `Com1::new`.
    struct Token;

    /// Transmit register of the first legacy UART.
    pub struct Com1(Token);

    impl Com1 {
        /// # Safety
        /// The caller must own the COM1 I/O port range and have already
        /// configured the UART.
        pub const unsafe fn new() -> Self {
            Com1(Token)
        }
    }

    impl BytePort for Com1 {
        fn write_byte(&mut self, byte: u8) {
            unsafe {
                outb(COM1_ADDR, byte);
            }
        }
    }

    pub static COM1_WRITER: Mutex<SerialWriter<Com1>> =
        Mutex::new(SerialWriter::new(unsafe { Com1::new() }));
}
