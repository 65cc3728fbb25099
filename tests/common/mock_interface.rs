//! Mock register interface for testing the LSM9DS0 driver
//!
//! One instance stands in for one sub-device; tests create a gyro mock and
//! an XM mock and hand both to the driver. The mock sits at the
//! `RegisterInterface` layer, below the generated register map, so every
//! masked read-modify-write shows up as a read followed by a write.

use device_driver::RegisterInterface;
use sparkfun_blocks::{WHO_AM_I_GYRO, WHO_AM_I_XM};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Records operations performed on the mock interface
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Read register operation
    ReadRegister {
        /// Register address
        address: u8,
        /// Value that was returned
        value: u8,
    },
    /// Write register operation
    WriteRegister {
        /// Register address
        address: u8,
        /// Value that was written
        value: u8,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register values, address -> value
    registers: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,
}

impl MockState {
    fn new() -> Self {
        Self {
            registers: HashMap::new(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
        }
    }
}

/// Mock interface for one LSM9DS0 sub-device
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a mock with no preset registers
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Create a mock behaving like the gyro sub-device
    pub fn gyro() -> Self {
        let mock = Self::new();
        mock.set_register(0x0F, WHO_AM_I_GYRO);
        mock
    }

    /// Create a mock behaving like the accel/mag sub-device
    pub fn xm() -> Self {
        let mock = Self::new();
        mock.set_register(0x0F, WHO_AM_I_XM);
        mock
    }

    /// Set a register value
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value (unwritten registers read as zero)
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Set the identity register value
    #[allow(dead_code)]
    pub fn set_who_am_i(&self, value: u8) {
        self.set_register(0x0F, value);
    }

    /// Load a little-endian axis triple at a base output address
    ///
    /// `base` is the low byte of the X axis (0x28 for gyro and accel,
    /// 0x08 for mag); the six bytes land in consecutive registers exactly
    /// as the chip streams them.
    pub fn set_axis_data(&self, base: u8, x: i16, y: i16, z: i16) {
        let mut state = self.state.borrow_mut();
        for (i, value) in [x, y, z].into_iter().enumerate() {
            let [low, high] = value.to_le_bytes();
            state.registers.insert(base + (i as u8) * 2, low);
            state.registers.insert(base + (i as u8) * 2 + 1, high);
        }
    }

    /// Load the two temperature output registers with a raw 16-bit pattern
    ///
    /// The chip only drives the low 12 bits; tests can set the upper nibble
    /// to garbage to prove the decoder masks it.
    pub fn set_temperature_data(&self, raw: u16) {
        let [low, high] = raw.to_le_bytes();
        self.set_register(0x05, low);
        self.set_register(0x06, high);
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    #[allow(dead_code)]
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        // A multi-byte read models the chip's auto-increment streaming:
        // consecutive registers, one transaction.
        for (i, byte) in read_data.iter_mut().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            *byte = state.registers.get(&reg_addr).copied().unwrap_or(0);

            state.operations.push(Operation::ReadRegister {
                address: reg_addr,
                value: *byte,
            });
        }

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        for (i, &byte) in write_data.iter().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            state.registers.insert(reg_addr, byte);

            state.operations.push(Operation::WriteRegister {
                address: reg_addr,
                value: byte,
            });
        }

        Ok(())
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
