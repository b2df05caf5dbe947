//! Wall-clock pacing: computes how many 8080 cycles to run from elapsed
//! real time, alternates the two per-frame interrupts, and tells the caller
//! when a new framebuffer is due. Kept separate from [`Machine`] — it owns
//! only timing state and borrows the CPU/Machine/decoder for one `tick`.

use std::time::{Duration, Instant};

use crate::cpu::Intel8080;
use crate::machine::Machine;
use crate::video;

/// 2 MHz 8080: 2000 cycles per millisecond of wall-clock time.
const CYCLES_PER_MS: u64 = 2000;
const HALF_FRAME: Duration = Duration::from_micros(8_333); // 1000/60/2 ms
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667); // 1000/60 ms

pub struct Scheduler {
    last_tick: Option<Instant>,
    next_interrupt: Instant,
    pending_interrupt: u8,
    last_frame_present: Instant,
    framebuffer: Vec<u8>,
}

/// What the host should do after a `tick` call.
pub struct TickOutcome {
    /// A new framebuffer was decoded this tick and is ready to present.
    pub present: bool,
}

impl Scheduler {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_tick: None,
            next_interrupt: now,
            pending_interrupt: 1,
            last_frame_present: now,
            framebuffer: vec![0u8; video::FRAMEBUFFER_LEN],
        }
    }

    pub fn framebuffer(&self) -> &[u8] {
        &self.framebuffer
    }

    /// Advances the emulation to `now`, running the CPU and delivering the
    /// alternating mid-screen/vblank interrupts. Call at least once per
    /// display frame.
    pub fn tick(
        &mut self,
        now: Instant,
        cpu: &mut Intel8080,
        machine: &mut Machine,
        color_enable: bool,
    ) -> TickOutcome {
        let last_tick = match self.last_tick {
            Some(t) => t,
            None => {
                self.last_tick = Some(now);
                self.next_interrupt = now + HALF_FRAME;
                self.pending_interrupt = 1;
                self.last_frame_present = now;
                now
            }
        };

        let mut present = false;
        if cpu.inte() && now >= self.next_interrupt {
            cpu.interrupt(machine, self.pending_interrupt);
            let delivered = self.pending_interrupt;
            self.pending_interrupt = if self.pending_interrupt == 1 { 2 } else { 1 };
            self.next_interrupt = now + HALF_FRAME;
            if delivered == 2 {
                // vblank: the frame is fully drawn, decode it now.
                self.framebuffer = video::decode(machine.video_ram(), color_enable);
            }
        }

        let elapsed = now.saturating_duration_since(last_tick);
        let cycles_budget = CYCLES_PER_MS * elapsed.as_millis() as u64;
        let mut cycles_run: u64 = 0;
        while cycles_run < cycles_budget {
            if cpu.is_halted() {
                break;
            }
            cycles_run += cpu.step(machine) as u64;
        }

        if now.saturating_duration_since(self.last_frame_present) >= FRAME_INTERVAL {
            present = true;
            self.last_frame_present = now;
        }

        self.last_tick = Some(now);
        TickOutcome { present }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
