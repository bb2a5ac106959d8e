//! Mock interface implementation for testing the VCNL4020 driver

use device_driver::RegisterInterface;
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
    fail_all_reads: bool,

    /// Total read_register invocations, including failed ones
    read_attempts: usize,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
            fail_all_reads: false,
            read_attempts: 0,
        };

        // Power-on defaults: config_lock bit reads 1 in the command register,
        // product ID revision reads 0x21
        state.registers.insert(0x80, 0x80);
        state.registers.insert(0x81, 0x21);

        state
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with power-on register values
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Set the product ID revision register value
    #[allow(dead_code)]
    pub fn set_product_revision(&self, value: u8) {
        self.set_register(0x81, value);
    }

    /// Set a 16-bit ambient light result (MSB at 0x85, LSB at 0x86)
    #[allow(dead_code)]
    pub fn set_ambient_result(&self, value: u16) {
        let [high, low] = value.to_be_bytes();
        self.set_register(0x85, high);
        self.set_register(0x86, low);
    }

    /// Set a 16-bit proximity result (MSB at 0x87, LSB at 0x88)
    #[allow(dead_code)]
    pub fn set_prox_result(&self, value: u16) {
        let [high, low] = value.to_be_bytes();
        self.set_register(0x87, high);
        self.set_register(0x88, low);
    }

    /// Set the data-ready flags in the command register without touching
    /// the enable bits
    #[allow(dead_code)]
    pub fn set_data_ready(&self, als: bool, prox: bool) {
        let mut command = self.get_register(0x80) & !0x60;
        if als {
            command |= 0x40;
        }
        if prox {
            command |= 0x20;
        }
        self.set_register(0x80, command);
    }

    /// Inject a read failure on the next read operation
    #[allow(dead_code)]
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    #[allow(dead_code)]
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Make every read fail, simulating an absent device
    #[allow(dead_code)]
    pub fn fail_all_reads(&self, enable: bool) {
        self.state.borrow_mut().fail_all_reads = enable;
    }

    /// Total read transactions attempted, including failed ones
    #[allow(dead_code)]
    pub fn read_attempts(&self) -> usize {
        self.state.borrow().read_attempts
    }

    /// Get the operations log
    #[allow(dead_code)]
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    #[allow(dead_code)]
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Count write transactions issued to one register address
    #[allow(dead_code)]
    pub fn write_count(&self, address: u8) -> usize {
        self.state
            .borrow()
            .operations
            .iter()
            .filter(|op| matches!(op, Operation::WriteRegister { address: a, .. } if *a == address))
            .count()
    }

    /// Value of the most recent write to one register address
    #[allow(dead_code)]
    pub fn last_write(&self, address: u8) -> Option<u8> {
        self.state
            .borrow()
            .operations
            .iter()
            .rev()
            .find_map(|op| match op {
                Operation::WriteRegister { address: a, value } if *a == address => Some(*value),
                _ => None,
            })
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error (NACK or bus fault)
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
        state.read_attempts += 1;

        // Check for injected failures
        if state.fail_all_reads {
            return Err(MockError::Communication);
        }
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        // Multi-byte reads auto-increment the register address
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

        // Multi-byte writes auto-increment the register address
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
