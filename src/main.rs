#![no_std]
#![no_main]

use core::ptr::addr_of_mut;

use esp_backtrace as _;
use esp_hal::{
    clock::ClockControl,
    cpu_control::{CpuControl, Stack},
    delay::Delay,
    entry,
    gpio::Io,
    peripherals::Peripherals,
    system::SystemControl,
};
use lovematrix_util::{matrix::Matrix, melody::MelodyPlayer};

mod buzzer;
mod driver;

const APP_CORE_STACK_SIZE: usize = 8192;

static mut APP_CORE_STACK: Stack<APP_CORE_STACK_SIZE> = Stack::new();

#[entry]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    log::info!("Starting");

    let peripherals = Peripherals::take();
    let system = SystemControl::new(peripherals.SYSTEM);
    let clocks = ClockControl::max(system.clock_control).freeze();
    let io = Io::new(peripherals.GPIO, peripherals.IO_MUX);

    let strip = driver::init(peripherals.RMT, io.pins.gpio7, &clocks);
    let mut matrix = Matrix::new(strip, Delay::new(&clocks));

    let ledc = peripherals.LEDC;
    let buzzer_pin = io.pins.gpio21;
    let buzzer_clocks = &clocks;
    let mut cpu_control = CpuControl::new(peripherals.CPU_CTRL);
    let _melody_core = cpu_control
        .start_app_core(
            unsafe { &mut *addr_of_mut!(APP_CORE_STACK) },
            move || {
                let buzzer = buzzer::Buzzer::new(ledc, buzzer_pin, buzzer_clocks);
                log::info!("Melody running on app core");
                MelodyPlayer::new(buzzer, Delay::new(buzzer_clocks)).run();
            },
        )
        .unwrap();

    log::info!("Animation running");
    loop {
        matrix.animate();
    }
}
