//! The frame loop: poll events, advance the scheduler, present. The
//! scheduler is wall-clock driven rather than a fixed per-frame cycle
//! count, so this loop just pumps events and lets it decide when a frame
//! is ready.

use std::time::Instant;

use sdl2::Sdl;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use invaders_core::cpu::Intel8080;
use invaders_core::machine::Machine;
use invaders_core::scheduler::Scheduler;

use crate::input::{KeyMap, PortBit};
use crate::video::Video;

pub fn run(
    sdl_context: &Sdl,
    video: &mut Video,
    cpu: &mut Intel8080,
    machine: &mut Machine,
    scheduler: &mut Scheduler,
    key_map: &KeyMap,
    color_enable: bool,
) -> Result<(), String> {
    let mut event_pump = sdl_context.event_pump()?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    scancode: Some(scancode),
                    repeat: false,
                    ..
                } => {
                    if let Some(pb) = key_map.get(scancode) {
                        set_input(machine, pb, true);
                    }
                }
                Event::KeyUp {
                    scancode: Some(scancode),
                    ..
                } => {
                    if let Some(pb) = key_map.get(scancode) {
                        set_input(machine, pb, false);
                    }
                }
                _ => {}
            }
        }

        let outcome = scheduler.tick(Instant::now(), cpu, machine, color_enable);
        if outcome.present {
            video.present(scheduler.framebuffer())?;
        }
    }

    Ok(())
}

fn set_input(machine: &mut Machine, pb: PortBit, pressed: bool) {
    match pb.port {
        1 => machine.set_input1(pb.bit, pressed),
        2 => machine.set_input2(pb.bit, pressed),
        _ => {}
    }
}
