//! Scancode-to-input-port translation, mapping directly to (port, bit)
//! pairs since this machine has two fixed input ports rather than an
//! abstract button list.

use std::collections::HashMap;

use invaders_core::machine::{port1, port2};
use sdl2::keyboard::Scancode;

#[derive(Clone, Copy)]
pub struct PortBit {
    pub port: u8,
    pub bit: u8,
}

pub struct KeyMap {
    bindings: HashMap<Scancode, PortBit>,
}

impl KeyMap {
    fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    fn bind(&mut self, scancode: Scancode, port: u8, bit: u8) {
        self.bindings.insert(scancode, PortBit { port, bit });
    }

    pub fn get(&self, scancode: Scancode) -> Option<PortBit> {
        self.bindings.get(&scancode).copied()
    }
}

/// The recommended default keyboard mapping.
pub fn default_key_map() -> KeyMap {
    let mut map = KeyMap::new();

    map.bind(Scancode::A, 1, port1::P1_LEFT);
    map.bind(Scancode::D, 1, port1::P1_RIGHT);
    map.bind(Scancode::Space, 1, port1::P1_SHOOT);
    map.bind(Scancode::C, 1, port1::COIN);
    map.bind(Scancode::LShift, 1, port1::P1_START);
    map.bind(Scancode::Return, 1, port1::P2_START);

    map.bind(Scancode::Left, 2, port2::P2_LEFT);
    map.bind(Scancode::Right, 2, port2::P2_RIGHT);
    map.bind(Scancode::Up, 2, port2::P2_SHOOT);
    map.bind(Scancode::Num6, 2, port2::DIP_SWITCH_1);
    map.bind(Scancode::Num7, 2, port2::DIP_SWITCH_2);
    map.bind(Scancode::Num8, 2, port2::TILT);
    map.bind(Scancode::Num9, 2, port2::DIP_SWITCH_BONUS);
    map.bind(Scancode::Num0, 2, port2::DIP_SWITCH_COIN);

    map
}
