use plotters::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use scalefit::{convex_hull, generate_random_points, COORDINATE_LIMIT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_example("hull_100.svg", 100)?;
    run_example("hull_5000.svg", 5000)?;
    Ok(())
}

fn run_example(filename: &str, n: usize) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let limit = COORDINATE_LIMIT as f64;
    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(-limit..limit, -limit..limit)?;

    let mut rng = StdRng::seed_from_u64(n as u64);
    let points = generate_random_points(n, &mut rng);
    let hull = convex_hull(&points);

    // Draw hull
    let mut poly: Vec<(f64, f64)> = hull.iter().map(|p| (p.x as f64, p.y as f64)).collect();
    chart.draw_series(std::iter::once(Polygon::new(
        poly.clone(),
        BLUE.mix(0.1).filled(),
    )))?;
    if let Some(&start) = poly.first() {
        poly.push(start);
    }
    chart.draw_series(std::iter::once(PathElement::new(
        poly,
        BLACK.stroke_width(2),
    )))?;

    // Draw points, hull vertices larger
    chart.draw_series(points.iter().map(|p| Circle::new((p.x as f64, p.y as f64), 2, RED.filled())))?;
    chart.draw_series(hull.iter().map(|p| Circle::new((p.x as f64, p.y as f64), 5, BLACK.filled())))?;

    root.present()?;
    println!("Output saved to {} ({} of {} points on the hull)", filename, hull.len(), n);
    Ok(())
}
