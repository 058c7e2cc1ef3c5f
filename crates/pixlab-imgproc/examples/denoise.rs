use pixlab_image::{Image, ImageSize};
use pixlab_imgproc::filter::kernels;
use pixlab_imgproc::pipeline::{degrade_and_restore, NoiseSpec};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // horizontal gradient test card
    let size = ImageSize {
        width: 64,
        height: 64,
    };
    let mut data = Vec::with_capacity(size.width * size.height * 3);
    for _y in 0..size.height {
        for x in 0..size.width {
            let v = (x * 255 / (size.width - 1)) as u8;
            data.extend_from_slice(&[v, v, v]);
        }
    }
    let src = Image::<u8, 3>::new(size, data)?;

    let noise_specs = [
        NoiseSpec {
            std_dev_coef: 0.2,
            mean: 0.0,
        },
        NoiseSpec {
            std_dev_coef: 0.3,
            mean: 0.0,
        },
    ];
    let filter_kernels = [
        kernels::gaussian_approx_kernel3()?,
        kernels::weighted_smoothing_kernel3()?,
    ];

    let mut rng = StdRng::seed_from_u64(42);
    let report = degrade_and_restore(&src, &noise_specs, &filter_kernels, &mut rng)?;

    println!("mean: {:.6}", report.stats.mean);
    println!("variance: {:.6}", report.stats.variance);
    println!("std dev: {:.6}", report.stats.std_dev);

    for (n, noisy) in report.noisy.iter().enumerate() {
        println!("noisy[{n}]: rmse={:.4} psnr={:.4}", noisy.rmse, noisy.psnr);
    }
    for (k, per_kernel) in report.filtered.iter().enumerate() {
        for (n, filtered) in per_kernel.iter().enumerate() {
            println!(
                "filtered[{k}][{n}]: rmse={:.4} psnr={:.4}",
                filtered.rmse, filtered.psnr
            );
        }
    }

    Ok(())
}
