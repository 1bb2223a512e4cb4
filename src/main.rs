use std::error::Error;
use std::f64::consts::PI;

use clap::{Parser, Subcommand};
use env_logger::Env;

use numcalc::configuration::Configuration;
use numcalc::math::differentiation::differentiator::NumericalDifferentiator;
use numcalc::math::function::countingfunction::CountingFunction;
use numcalc::math::function::function::Func;
use numcalc::math::integration::integrator::Integrator;
use numcalc::math::polynomial::legendrepolynomial::legendre_polynomials;
use numcalc::math::sampling::sampler::sample;

#[derive(Parser)]
#[command(name = "numcalc", about = "Finite differences, quadrature and Legendre polynomials")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convergence of each quadrature rule against known integrals
    Integrate,
    /// Forward, backward and central differences of sin(x)
    Differentiate,
    /// P_0 ..= P_max on [-1, 1] as CSV
    Legendre,
    /// Sample a built-in function as CSV
    Sample {
        #[arg(long, default_value = "sin")]
        function: String,
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        #[arg(long, default_value_t = 5.0)]
        stop: f64,
    },
}

struct Problem {
    title: &'static str,
    f: Func,
    a: f64,
    b: f64,
    solution: f64,
}

fn problems() -> Vec<Problem> {
    vec![
        Problem {
            title: "Integral[1/(x+2), -1, 1]",
            f: Func::new(|x| 1.0 / (x + 2.0)),
            a: -1.0,
            b: 1.0,
            solution: 3f64.ln(),
        },
        Problem {
            title: "Integral[sin(x^2), 0, 1]",
            f: Func::new(|x| (x * x).sin()),
            a: 0.0,
            b: 1.0,
            solution: 0.310_268_301_723_381_1,
        },
        Problem {
            title: "Integral[2x^4 + 3x^3 + 4x^2 + 5x + 6, -10, 10]",
            f: Func::new(|x| 2.0 * x.powi(4) + 3.0 * x.powi(3) + 4.0 * x * x + 5.0 * x + 6.0),
            a: -10.0,
            b: 10.0,
            solution: 82_786.666_666_666_67,
        },
        Problem {
            title: "Integral[e^-2x, 0, 2]",
            f: Func::new(|x| (-2.0 * x).exp()),
            a: 0.0,
            b: 2.0,
            solution: (1.0 - (-4f64).exp()) / 2.0,
        },
    ]
}

fn relative_error(guess: f64, solution: f64) -> f64 {
    (guess - solution).abs() / solution.abs()
}

fn builtin(name: &str) -> Option<Func> {
    match name {
        "sin" => Some(Func::new(f64::sin)),
        "cos" => Some(Func::new(f64::cos)),
        "exp" => Some(Func::new(f64::exp)),
        "wave" => Some(Func::new(|x| (2.0 * x).cos() + (-x * x / 2.0).exp() * (10.0 * x).sin())),
        "line" => Some(Func::new(|x| 2.0 * x - 3.0)),
        _ => None,
    }
}

fn run_integrate(config: &Configuration) {
    for problem in problems() {
        println!("{}", problem.title);
        println!("Soln={:.6}", problem.solution);
        println!("N, Method, Guess, Error, Evaluations");
        for &n in config.subdivisions() {
            for &rule in config.rules() {
                let counter = CountingFunction::wrap(problem.f.clone());
                let integrator = Integrator::new(counter.func(), n);
                match integrator.integrate(rule, problem.a, problem.b) {
                    Ok(guess) => println!(
                        "{}, {}, {:.6}, {:.2e}, {}",
                        n,
                        rule,
                        guess,
                        relative_error(guess, problem.solution),
                        counter.unique_points()
                    ),
                    Err(error) => println!("{}, {}, not applicable: {}", n, rule, error),
                }
            }
        }
        println!();
    }
}

fn run_differentiate() -> Result<(), Box<dyn Error>> {
    let start = PI / 2.0;
    let stop = 2.0 * PI + PI / 2.0;
    println!("H, Forward, Backward, Central");
    for h in [0.4, 0.2, 0.1, 0.05] {
        let diff = NumericalDifferentiator::new(h, Func::new(f64::sin))?;
        let max_error = |df: Func| {
            sample(&df, start, stop, h)
                .iter()
                .map(|p| (p.y() - p.x().cos()).abs())
                .fold(0.0, f64::max)
        };
        println!(
            "{:.3}, {:.2e}, {:.2e}, {:.2e}",
            h,
            max_error(diff.forward_difference()),
            max_error(diff.backward_difference()),
            max_error(diff.central_difference())
        );
    }
    Ok(())
}

fn run_legendre(config: &Configuration) {
    println!("order, x, y");
    for (order, p) in legendre_polynomials(config.legendre_max_order()).iter().enumerate() {
        for point in sample(p, -1.0, 1.0, config.sample_step()) {
            println!("{}, {:.6}, {:.6}", order, point.x(), point.y());
        }
    }
}

fn run_sample(config: &Configuration, name: &str, start: f64, stop: f64) -> Result<(), Box<dyn Error>> {
    let f = builtin(name).ok_or_else(|| format!("unknown function '{}'", name))?;
    let diff = NumericalDifferentiator::new(config.differentiation_step(), f.clone())?;
    let df = diff.central_difference();
    println!("x, f(x), df/dx");
    for point in sample(&f, start, stop, config.sample_step()) {
        println!("{:.6}, {:.6}, {:.6}", point.x(), point.y(), df.value(point.x()));
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::new(),
    };

    match cli.command {
        Command::Integrate => run_integrate(&config),
        Command::Differentiate => run_differentiate()?,
        Command::Legendre => run_legendre(&config),
        Command::Sample { function, start, stop } => run_sample(&config, &function, start, stop)?,
    }
    Ok(())
}
