use tracker_sim::math::Point2d;
use tracker_sim::{Goal, Path, Pose, Simulation, TrackerAttributes};

fn main() {
    let mut sim = Simulation::new();
    let tracker = sim.add_tracker(&TrackerAttributes::default(), Pose::new(20.0, 20.0, 0.0));

    let path = Path::new(vec![
        Point2d::new(50.0, 50.0),
        Point2d::new(200.0, 80.0),
        Point2d::new(300.0, 250.0),
        Point2d::new(450.0, 300.0),
    ])
    .expect("demo path has enough waypoints");
    sim.set_goal(tracker, Goal::Pursue(path));

    println!("Simulating...");
    while !sim.get_tracker(tracker).arrived() {
        sim.step();
        if sim.frame() % 25 == 0 {
            let pose = sim.get_tracker(tracker).pose();
            println!(
                "frame {:4}: ({:7.2}, {:7.2}) heading {:5.2} rad",
                sim.frame(),
                pose.position.x,
                pose.position.y,
                pose.heading,
            );
        }
        if sim.frame() > 10_000 {
            println!("gave up after {} frames", sim.frame());
            return;
        }
    }

    let pose = sim.get_tracker(tracker).pose();
    println!(
        "arrived at ({:.2}, {:.2}) after {} frames",
        pose.position.x,
        pose.position.y,
        sim.frame(),
    );
}
