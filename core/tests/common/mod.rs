use invaders_core::cpu::Bus;

/// Bare 64 KiB RAM with no write guard and no I/O behavior, for exercising
/// the CPU core in isolation from the Space Invaders memory map.
pub struct FlatBus {
    pub mem: [u8; 0x10000],
    pub in_port_value: u8,
    pub last_out: Option<(u8, u8)>,
}

impl FlatBus {
    pub fn new() -> Self {
        Self {
            mem: [0u8; 0x10000],
            in_port_value: 0,
            last_out: None,
        }
    }

    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let start = addr as usize;
        self.mem[start..start + bytes.len()].copy_from_slice(bytes);
    }
}

impl Bus for FlatBus {
    fn read(&self, addr: u16) -> u8 {
        self.mem[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.mem[addr as usize] = value;
    }

    fn io_read(&mut self, _port: u8) -> u8 {
        self.in_port_value
    }

    fn io_write(&mut self, port: u8, value: u8) {
        self.last_out = Some((port, value));
    }
}
