use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use vector_sim_core::{formula, AnimationKind, EntityRegistry, Transform, Vec3};

/// Headless driver for the vector simulation core
#[derive(Parser, Debug)]
#[command(name = "vector-sim-demo")]
#[command(about = "Vector algebra and timed transform animation demo", long_about = None)]
struct Args {
    /// What to run
    #[arg(value_enum, default_value = "translate")]
    command: Command,

    /// X component of the input vector
    #[arg(short, long, default_value_t = 10.0)]
    x: f64,

    /// Y component of the input vector
    #[arg(short, long, default_value_t = 0.0)]
    y: f64,

    /// Z component of the input vector
    #[arg(short, long, default_value_t = 0.0)]
    z: f64,

    /// X component of the second vector (algebra only)
    #[arg(long, default_value_t = 0.0)]
    x2: f64,

    /// Y component of the second vector (algebra only)
    #[arg(long, default_value_t = 5.0)]
    y2: f64,

    /// Z component of the second vector (algebra only)
    #[arg(long, default_value_t = 0.0)]
    z2: f64,

    /// Scalar for the multiplication line (algebra only)
    #[arg(short, long, default_value_t = 2.0)]
    scalar: f64,

    /// Mass multiplier for force integration
    #[arg(short, long, default_value_t = 1.0)]
    mass: f64,

    /// Tween duration in seconds
    #[arg(short, long, default_value_t = 2.0)]
    duration: f64,

    /// Frame interval in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f64,

    /// Total simulated time in seconds
    #[arg(long, default_value_t = 3.0)]
    run_time: f64,

    /// Report interval in seconds
    #[arg(short, long, default_value_t = 0.5)]
    report_interval: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Command {
    /// Integrate an acceleration indefinitely
    Force,
    /// Tween the scale toward the given axes
    Scale,
    /// Tween the Euler rotation by the given delta
    Rotate,
    /// Tween the position by the given delta
    Translate,
    /// Print formula/result lines for the two input vectors
    Algebra,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let v = parse_vector(args.x, args.y, args.z);

    if args.command == Command::Algebra {
        let w = parse_vector(args.x2, args.y2, args.z2);
        print_algebra(v, w, args.scalar);
        return;
    }

    let kind = match args.command {
        Command::Force => AnimationKind::force(v, args.mass),
        Command::Scale => AnimationKind::ScaleTween {
            target_delta: v,
            duration: args.duration,
        },
        Command::Rotate => AnimationKind::RotationTween {
            target_delta: v,
            duration: args.duration,
        },
        Command::Translate => AnimationKind::TranslationTween {
            target_delta: v,
            duration: args.duration,
        },
        Command::Algebra => unreachable!(),
    };

    let mut registry = EntityRegistry::new();
    let id = registry.register_with(Transform::default());
    let animator = registry.get_mut(id).expect("entity was just registered");

    if let Err(err) = animator.start(kind) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    println!("=== {:?}: {v} over {}s ===", args.command, args.run_time);

    let mut elapsed = 0.0;
    let mut next_report = args.report_interval;
    while elapsed < args.run_time {
        animator.tick(args.frame_dt);
        elapsed += args.frame_dt;

        if elapsed >= next_report {
            // Signed axis markers, the way a visualizer would pick its draw
            // direction from the requested delta.
            let axes: Vec<String> = animator.requested_delta().map_or_else(Vec::new, |delta| {
                animator
                    .active_axes()
                    .axes()
                    .map(|axis| {
                        let sign = if delta.component(axis) < 0.0 { '-' } else { '+' };
                        format!("{sign}{axis}")
                    })
                    .collect()
            });
            let progress = animator
                .session()
                .and_then(|session| session.progress())
                .map_or(String::new(), |p| format!(", progress: {:.0}%", p * 100.0));
            println!(
                "\n[t = {elapsed:.2}s] status: {:?}, active axes: [{}]{progress}",
                animator.status(),
                axes.join(", ")
            );
            println!("{}", animator.transform());
            next_report += args.report_interval;
        }

        if animator.is_idle() {
            break;
        }
    }

    println!("\n=== final state ===");
    println!("{}", animator.transform());
}

fn parse_vector(x: f64, y: f64, z: f64) -> Vec3 {
    match Vec3::checked(x, y, z) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_algebra(a: Vec3, b: Vec3, scalar: f64) {
    println!("a = {a}, b = {b}, k = {scalar}");
    println!(
        "a + b: {}",
        formula::operation_summary(&formula::addition(a, b), a + b)
    );
    println!(
        "a - b: {}",
        formula::operation_summary(&formula::subtraction(a, b), a - b)
    );
    println!(
        "a * k: {}",
        formula::operation_summary(&formula::scalar_multiplication(a, scalar), a.scale(scalar))
    );
    println!(
        "|a|:   {}",
        formula::operation_summary(&formula::magnitude(a), a.magnitude())
    );
    println!(
        "a · b: {}",
        formula::operation_summary(&formula::dot_product(a, b), a.dot(b))
    );
    println!(
        "a × b: {}",
        formula::operation_summary(&formula::cross_product(a, b), a.cross(b))
    );
    println!(
        "â:     {}",
        formula::operation_summary(&formula::unit_vector(a), a.unit())
    );
    println!(
        "angle: {}",
        formula::operation_summary(
            &formula::angle_between_degrees(a, b),
            a.angle_between_degrees(b)
        )
    );
    println!(
        "proj:  {}",
        formula::operation_summary(&formula::vector_projection(a, b), a.project_onto(b))
    );
    println!(
        "plane: {}",
        formula::operation_summary(&formula::plane_projection(a, b), a.reject_from(b))
    );
}
