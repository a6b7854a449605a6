use chrono::Utc;
use earth_rotation::{format_date_time, RotationCalculator, TauntGenerator};

fn main() {
    let calc = RotationCalculator::new();
    let now = Utc::now();
    let rotations = calc.current_rotations();

    println!("now: {}", format_date_time(&now));
    println!("rotations: {rotations}");
    println!("next whole rotation: {:?}", calc.date_from_rotations(rotations.value().ceil()));
    println!("{}", TauntGenerator::default().generate_taunt(&now, rotations));
}
