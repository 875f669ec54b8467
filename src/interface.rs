//! Bus interface for the MPU-6050
//!
//! The driver talks to the sensor through [`device_driver::RegisterInterface`].
//! [`I2cInterface`] implements it on top of an `embedded-hal` I2C bus; any other
//! transport (a bit-banged bus, a test double, a bridge chip) can be plugged in
//! by implementing the same trait.

use crate::I2C_ADDRESS_AD0_LOW;

use device_driver::RegisterInterface;

/// I2C interface for the MPU-6050
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x68, AD0 pin LOW)
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Mpu6050Driver::new(interface, delay);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_AD0_LOW,
        }
    }

    /// Create a new I2C interface with the alternative address (0x69, AD0 pin HIGH)
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: crate::I2C_ADDRESS_AD0_HIGH,
        }
    }

    /// Create a new I2C interface with a custom 7-bit device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit bus address this interface talks to
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Every register is 8 bits wide
        // One `[register, value]` frame per byte, addressed consecutively
        for (offset, &value) in write_data.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let register = address.wrapping_add(offset as u8);
            self.i2c.write(self.address, &[register, value])?;
        }
        Ok(())
    }
}
