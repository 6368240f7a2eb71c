use egui::Color32;
use image::{Rgba, RgbaImage};
use shape_canvas::error::FilterError;
use shape_canvas::filters::{
    ConvolveFilter, ImageFilter, Kernel, KernelPreset, LookupFilter, LookupTable, PopArt, Posterize, RedIsolation,
    ToneShift,
};

fn solid(r: u8, g: u8, b: u8, a: u8) -> RgbaImage {
    RgbaImage::from_pixel(9, 9, Rgba([r, g, b, a]))
}

#[test]
fn test_posterize_bands() {
    let out = Posterize::new(4).unwrap().filter(&solid(130, 63, 255, 200));
    assert_eq!(*out.get_pixel(4, 4), Rgba([128, 0, 192, 200]));

    let out = Posterize::new(2).unwrap().filter(&solid(127, 128, 0, 255));
    assert_eq!(*out.get_pixel(0, 0), Rgba([0, 128, 0, 255]));
}

#[test]
fn test_posterize_rejects_zero_levels() {
    assert_eq!(
        Posterize::new(0).unwrap_err(),
        FilterError::InvalidArgument("posterize needs at least one level".to_string())
    );
}

#[test]
fn test_pop_art_black_and_white() {
    let pop = PopArt::new(128, Color32::WHITE, Color32::BLACK);
    let mut src = solid(200, 200, 200, 255);
    src.put_pixel(0, 0, Rgba([50, 50, 50, 255]));
    let out = pop.filter(&src);

    assert_eq!(*out.get_pixel(5, 5), Rgba([255, 255, 255, 255]));
    assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
}

#[test]
fn test_pop_art_threshold_is_inclusive() {
    let pop = PopArt::new(100, Color32::YELLOW, Color32::from_rgb(20, 0, 60));

    // mean of (100, 100, 100) is exactly the threshold
    let out = pop.filter(&solid(100, 100, 100, 255));
    assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 0, 255]));

    // integer mean of (100, 100, 99) is 99
    let out = pop.filter(&solid(100, 100, 99, 90));
    assert_eq!(*out.get_pixel(0, 0), Rgba([20, 0, 60, 90]));
}

#[test]
fn test_red_isolation_greys_the_rest() {
    let red = RedIsolation::new(20);

    let out = red.filter(&solid(220, 40, 30, 255));
    assert_eq!(*out.get_pixel(1, 1), Rgba([220, 40, 30, 255]));

    let out = red.filter(&solid(90, 60, 30, 255));
    assert_eq!(*out.get_pixel(1, 1), Rgba([60, 60, 60, 255]));
}

#[test]
fn test_tone_shift_only_touches_similar_hues() {
    let shift = ToneShift::new(Color32::from_rgb(255, 0, 0), 30.0, 240.0).unwrap();

    let mut src = solid(255, 0, 0, 255);
    src.put_pixel(0, 0, Rgba([0, 255, 0, 128]));
    let out = shift.filter(&src);

    assert_eq!(*out.get_pixel(4, 4), Rgba([0, 0, 255, 255]));
    assert_eq!(*out.get_pixel(0, 0), Rgba([0, 255, 0, 128]));
}

#[test]
fn test_tone_shift_keeps_greys() {
    let shift = ToneShift::new(Color32::RED, 10.0, 90.0).unwrap();
    let out = shift.filter(&solid(128, 128, 128, 255));
    assert_eq!(*out.get_pixel(3, 3), Rgba([128, 128, 128, 255]));
}

#[test]
fn test_lookup_filters() {
    let invert = LookupFilter::new(LookupTable::from_fn(|v| 255 - v));
    let out = invert.filter(&solid(0, 100, 255, 42));
    assert_eq!(*out.get_pixel(0, 0), Rgba([255, 155, 0, 42]));

    let sepia = LookupFilter::new(LookupTable::sepia());
    let out = sepia.filter(&solid(100, 100, 100, 255));
    assert_eq!(*out.get_pixel(0, 0), Rgba([135, 120, 93, 255]));

    let abc = LookupFilter::new(LookupTable::abc(0, 0, 255));
    let out = abc.filter(&solid(64, 128, 255, 255));
    assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
}

#[test]
fn test_mean_blur_on_uniform_image() {
    let blur = ConvolveFilter::new(Kernel::preset(KernelPreset::Mean5x5));
    let out = blur.filter(&solid(80, 160, 240, 255));

    assert_eq!(*out.get_pixel(4, 4), Rgba([80, 160, 240, 255]));
    // the two-pixel border cannot fit the kernel
    assert_eq!(*out.get_pixel(1, 4), Rgba([0, 0, 0, 255]));
    assert_eq!(*out.get_pixel(4, 7), Rgba([0, 0, 0, 255]));
    assert_eq!(*out.get_pixel(2, 2), Rgba([80, 160, 240, 255]));
}

#[test]
fn test_sharpen_boosts_a_bright_dot() {
    let mut src = solid(100, 100, 100, 255);
    src.put_pixel(4, 4, Rgba([150, 150, 150, 255]));
    let out = ConvolveFilter::new(Kernel::sharpen(1.0)).filter(&src);

    // 5 * 150 - 4 * 100
    assert_eq!(out.get_pixel(4, 4)[0], 255);
    // 5 * 100 - 150 - 3 * 100
    assert_eq!(out.get_pixel(4, 3)[0], 50);
    assert_eq!(out.get_pixel(2, 2)[0], 100);
}

#[test]
fn test_one_by_one_kernel_is_identity() {
    let mut src = solid(10, 20, 30, 255);
    src.put_pixel(0, 0, Rgba([200, 100, 50, 7]));
    let out = ConvolveFilter::new(Kernel::mean(1).unwrap()).filter(&src);
    assert_eq!(out, src);
}

#[test]
fn test_invalid_arguments() {
    assert!(matches!(Kernel::mean(0), Err(FilterError::InvalidArgument(_))));
    assert!(matches!(Kernel::new(2, vec![0.25; 3]), Err(FilterError::InvalidArgument(_))));
    assert!(matches!(
        ToneShift::new(Color32::RED, f32::NAN, 0.0),
        Err(FilterError::InvalidArgument(_))
    ));
}

#[test]
fn test_missing_source_is_reported() {
    let filters: Vec<Box<dyn ImageFilter>> = vec![
        Box::new(Posterize::new(8).unwrap()),
        Box::new(RedIsolation::new(0)),
        Box::new(ConvolveFilter::new(Kernel::sharpen(0.5))),
    ];
    for filter in &filters {
        assert_eq!(filter.apply(None).unwrap_err(), FilterError::MissingSource, "{}", filter.name());
        assert!(filter.apply(Some(&solid(1, 2, 3, 4))).is_ok());
    }
}
