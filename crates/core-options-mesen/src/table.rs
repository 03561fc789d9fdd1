//! Static option table.

use core_options::{Category, OptionDef, OptionValue, Schema};

pub const CATEGORIES: &[Category<'static>] = &[
    Category {
        id: "system",
        title: "System",
        description: "Change hardware-related settings.",
    },
    Category {
        id: "video_general",
        title: "Video - General",
        description: "Change aspect ratio, overscan values, and other video-related settings.",
    },
    Category {
        id: "video_image_adjustments",
        title: "Video - Image Adjustments",
        description: "Change values, color palette, video filters and other settings affecting the image output.",
    },
    Category {
        id: "audio_general",
        title: "Audio - General",
        description: "Change sample rate, stereo effects and other sound-related settings.",
    },
    Category {
        id: "audio_channel_balance",
        title: "Audio - Channel Balance",
        description: "Change the volume and overall balance of the audio channels.",
    },
    Category {
        id: "audio_equalizer",
        title: "Audio - Equalizer",
        description: "Tweak and finetune the equalization of the sound.",
    },
    Category {
        id: "input",
        title: "Input",
        description: "Change input devices and other input-related settings.",
    },
    Category {
        id: "hacks",
        title: "Emulation Hacks",
        description: "Change processor overclocking and emulation accuracy settings affecting low-level performance and compatibility.",
    },
];

const REGIONS: &[OptionValue<'static>] = &[
    OptionValue::labeled("Auto", "Auto"),
    OptionValue::labeled("NTSC", "NTSC"),
    OptionValue::labeled("PAL", "PAL"),
    OptionValue::labeled("Dendy", "Dendy"),
];

const TOGGLE: &[OptionValue<'static>] = &[
    OptionValue::new("disabled"),
    OptionValue::new("enabled"),
];

const ASPECT_RATIOS: &[OptionValue<'static>] = &[
    OptionValue::labeled("Auto", "Auto"),
    OptionValue::labeled("NTSC", "NTSC (8:7)"),
    OptionValue::labeled("PAL", "PAL (11:8)"),
    OptionValue::new("4:3"),
    OptionValue::new("4:3 (Preserved)"),
    OptionValue::new("16:9"),
    OptionValue::new("16:9 (Preserved)"),
    OptionValue::new("No Stretching"),
];

const OVERSCAN_SIZES: &[OptionValue<'static>] = &[
    OptionValue::labeled("None", "disabled"),
    OptionValue::labeled("4px", "4 Pixels"),
    OptionValue::labeled("8px", "8 Pixels"),
    OptionValue::labeled("12px", "12 Pixels"),
    OptionValue::labeled("16px", "16 Pixels"),
];

const ROTATIONS: &[OptionValue<'static>] = &[
    OptionValue::labeled("None", "disabled"),
    OptionValue::labeled("90 degrees", "90 Degrees"),
    OptionValue::labeled("180 degrees", "180 Degrees"),
    OptionValue::labeled("270 degrees", "270 Degrees"),
];

const FPS_MODES: &[OptionValue<'static>] = &[
    OptionValue::labeled("fps_mesen", "Mesen"),
    OptionValue::labeled("fps_fceumm", "FCEUmm"),
    OptionValue::labeled("fps_integer", "Integer"),
];

const PALETTES: &[OptionValue<'static>] = &[
    OptionValue::new("Default"),
    OptionValue::new("Composite Direct (by FirebrandX)"),
    OptionValue::labeled("Nes Classic", "NES Classic"),
    OptionValue::new("Nestopia (RGB)"),
    OptionValue::new("Original Hardware (by FirebrandX)"),
    OptionValue::new("PVM Style (by FirebrandX)"),
    OptionValue::new("Sony CXA2025AS"),
    OptionValue::new("Unsaturated v6 (by FirebrandX)"),
    OptionValue::new("YUV v3 (by FirebrandX)"),
    OptionValue::new("Wavebeam (by nakedarthur)"),
    OptionValue::labeled("Custom", "Custom (MesenPalette.pal file)"),
    OptionValue::labeled("Raw", "Raw (Disables All Adjustments)"),
];

const IMAGE_MODES: &[OptionValue<'static>] = &[
    OptionValue::new("Default"),
    OptionValue::new("Custom"),
];

const SIGNED_LEVELS: &[OptionValue<'static>] = &[
    OptionValue::labeled("-1.00", "-100"),
    OptionValue::labeled("-0.95", "-95"),
    OptionValue::labeled("-0.90", "-90"),
    OptionValue::labeled("-0.85", "-85"),
    OptionValue::labeled("-0.80", "-80"),
    OptionValue::labeled("-0.75", "-75"),
    OptionValue::labeled("-0.70", "-70"),
    OptionValue::labeled("-0.65", "-65"),
    OptionValue::labeled("-0.60", "-60"),
    OptionValue::labeled("-0.55", "-55"),
    OptionValue::labeled("-0.50", "-50"),
    OptionValue::labeled("-0.45", "-45"),
    OptionValue::labeled("-0.40", "-40"),
    OptionValue::labeled("-0.35", "-35"),
    OptionValue::labeled("-0.30", "-30"),
    OptionValue::labeled("-0.25", "-25"),
    OptionValue::labeled("-0.20", "-20"),
    OptionValue::labeled("-0.15", "-15"),
    OptionValue::labeled("-0.10", "-10"),
    OptionValue::labeled("-0.05", "-5"),
    OptionValue::labeled("0.00", "Default"),
    OptionValue::labeled("0.05", "+5"),
    OptionValue::labeled("0.10", "+10"),
    OptionValue::labeled("0.15", "+15"),
    OptionValue::labeled("0.20", "+20"),
    OptionValue::labeled("0.25", "+25"),
    OptionValue::labeled("0.30", "+30"),
    OptionValue::labeled("0.35", "+35"),
    OptionValue::labeled("0.40", "+40"),
    OptionValue::labeled("0.45", "+45"),
    OptionValue::labeled("0.50", "+50"),
    OptionValue::labeled("0.55", "+55"),
    OptionValue::labeled("0.60", "+60"),
    OptionValue::labeled("0.65", "+65"),
    OptionValue::labeled("0.70", "+70"),
    OptionValue::labeled("0.75", "+75"),
    OptionValue::labeled("0.80", "+80"),
    OptionValue::labeled("0.85", "+85"),
    OptionValue::labeled("0.90", "+90"),
    OptionValue::labeled("0.95", "+95"),
    OptionValue::labeled("1.00", "+100"),
];

const SCANLINE_LEVELS: &[OptionValue<'static>] = &[
    OptionValue::labeled("0.00", "disabled"),
    OptionValue::labeled("0.05", "5%"),
    OptionValue::labeled("0.10", "10%"),
    OptionValue::labeled("0.15", "15%"),
    OptionValue::labeled("0.20", "20%"),
    OptionValue::labeled("0.25", "25%"),
    OptionValue::labeled("0.30", "30%"),
    OptionValue::labeled("0.35", "35%"),
    OptionValue::labeled("0.40", "40%"),
    OptionValue::labeled("0.45", "45%"),
    OptionValue::labeled("0.50", "50%"),
    OptionValue::labeled("0.55", "55%"),
    OptionValue::labeled("0.60", "60%"),
    OptionValue::labeled("0.65", "65%"),
    OptionValue::labeled("0.70", "70%"),
    OptionValue::labeled("0.75", "75%"),
    OptionValue::labeled("0.80", "80%"),
    OptionValue::labeled("0.85", "85%"),
    OptionValue::labeled("0.90", "90%"),
    OptionValue::labeled("0.95", "95%"),
    OptionValue::labeled("1.00", "100%"),
];

const NTSC_FILTERS: &[OptionValue<'static>] = &[
    OptionValue::labeled("Disabled", "disabled"),
    OptionValue::labeled("Composite (Blargg)", "NTSC Composite (Blargg)"),
    OptionValue::labeled("S-Video (Blargg)", "NTSC S-Video (Blargg)"),
    OptionValue::labeled("RGB (Blargg)", "NTSC RGB (Blargg)"),
    OptionValue::labeled("Monochrome (Blargg)", "NTSC Monochrome (Blargg)"),
    OptionValue::labeled("Bisqwit 2x", "NTSC Bisqwit 2x"),
    OptionValue::labeled("Bisqwit 4x", "NTSC Bisqwit 4x"),
    OptionValue::labeled("Bisqwit 8x", "NTSC Bisqwit 8x"),
    OptionValue::labeled("Custom (Blargg)", "NTSC Custom (Blargg)"),
    OptionValue::labeled("Custom (Bisqwit 2x)", "NTSC Custom (Bisqwit 2x)"),
    OptionValue::labeled("Custom (Bisqwit 4x)", "NTSC Custom (Bisqwit 4x)"),
    OptionValue::labeled("Custom (Bisqwit 8x)", "NTSC Custom (Bisqwit 8x)"),
];

const BLUR_LEVELS: &[OptionValue<'static>] = &[
    OptionValue::labeled("-0.50", "-50"),
    OptionValue::labeled("-0.40", "-40"),
    OptionValue::labeled("-0.30", "-30"),
    OptionValue::labeled("-0.20", "-20"),
    OptionValue::labeled("-0.10", "-10"),
    OptionValue::labeled("0.00", "Default"),
    OptionValue::labeled("0.10", "+10"),
    OptionValue::labeled("0.20", "+20"),
    OptionValue::labeled("0.30", "+30"),
    OptionValue::labeled("0.40", "+40"),
    OptionValue::labeled("0.50", "+50"),
    OptionValue::labeled("0.60", "+60"),
    OptionValue::labeled("0.70", "+70"),
    OptionValue::labeled("0.80", "+80"),
    OptionValue::labeled("0.90", "+90"),
    OptionValue::labeled("1.00", "+100"),
    OptionValue::labeled("1.10", "+110"),
    OptionValue::labeled("1.20", "+120"),
    OptionValue::labeled("1.30", "+130"),
    OptionValue::labeled("1.40", "+140"),
    OptionValue::labeled("1.50", "+150"),
    OptionValue::labeled("1.60", "+160"),
    OptionValue::labeled("1.70", "+170"),
    OptionValue::labeled("1.80", "+180"),
    OptionValue::labeled("1.90", "+190"),
    OptionValue::labeled("2.00", "+200"),
    OptionValue::labeled("2.10", "+210"),
    OptionValue::labeled("2.20", "+220"),
    OptionValue::labeled("2.30", "+230"),
    OptionValue::labeled("2.40", "+240"),
    OptionValue::labeled("2.50", "+250"),
    OptionValue::labeled("2.60", "+260"),
    OptionValue::labeled("2.70", "+270"),
    OptionValue::labeled("2.80", "+280"),
    OptionValue::labeled("2.90", "+290"),
    OptionValue::labeled("3.00", "+300"),
    OptionValue::labeled("3.10", "+310"),
    OptionValue::labeled("3.20", "+320"),
    OptionValue::labeled("3.30", "+330"),
    OptionValue::labeled("3.40", "+340"),
    OptionValue::labeled("3.50", "+350"),
    OptionValue::labeled("3.60", "+360"),
    OptionValue::labeled("3.70", "+370"),
    OptionValue::labeled("3.80", "+380"),
    OptionValue::labeled("3.90", "+390"),
    OptionValue::labeled("4.00", "+400"),
];

const BLEED_LEVELS: &[OptionValue<'static>] = &[
    OptionValue::labeled("0.00", "0"),
    OptionValue::labeled("0.10", "+10"),
    OptionValue::labeled("0.20", "+20"),
    OptionValue::labeled("0.30", "+30"),
    OptionValue::labeled("0.40", "+40"),
    OptionValue::labeled("0.50", "+50 (Default)"),
    OptionValue::labeled("0.60", "+60"),
    OptionValue::labeled("0.70", "+70"),
    OptionValue::labeled("0.80", "+80"),
    OptionValue::labeled("0.90", "+90"),
    OptionValue::labeled("1.00", "+100"),
    OptionValue::labeled("1.10", "+110"),
    OptionValue::labeled("1.20", "+120"),
    OptionValue::labeled("1.30", "+130"),
    OptionValue::labeled("1.40", "+140"),
    OptionValue::labeled("1.50", "+150"),
    OptionValue::labeled("1.60", "+160"),
    OptionValue::labeled("1.70", "+170"),
    OptionValue::labeled("1.80", "+180"),
    OptionValue::labeled("1.90", "+190"),
    OptionValue::labeled("2.00", "+200"),
    OptionValue::labeled("2.10", "+210"),
    OptionValue::labeled("2.20", "+220"),
    OptionValue::labeled("2.30", "+230"),
    OptionValue::labeled("2.40", "+240"),
    OptionValue::labeled("2.50", "+250"),
    OptionValue::labeled("2.60", "+260"),
    OptionValue::labeled("2.70", "+270"),
    OptionValue::labeled("2.80", "+280"),
    OptionValue::labeled("2.90", "+290"),
    OptionValue::labeled("3.00", "+300"),
    OptionValue::labeled("3.10", "+310"),
    OptionValue::labeled("3.20", "+320"),
    OptionValue::labeled("3.30", "+330"),
    OptionValue::labeled("3.40", "+340"),
    OptionValue::labeled("3.50", "+350"),
    OptionValue::labeled("3.60", "+360"),
    OptionValue::labeled("3.70", "+370"),
    OptionValue::labeled("3.80", "+380"),
    OptionValue::labeled("3.90", "+390"),
    OptionValue::labeled("4.00", "+400"),
];

const SAMPLE_RATES: &[OptionValue<'static>] = &[
    OptionValue::labeled("11025", "11025 Hz"),
    OptionValue::labeled("22050", "22050 Hz"),
    OptionValue::labeled("44100", "44100 Hz"),
    OptionValue::labeled("48000", "48000 Hz"),
    OptionValue::labeled("96000", "96000 Hz"),
];

const TURBO_SPEEDS: &[OptionValue<'static>] = &[
    OptionValue::labeled("Disabled", "disabled"),
    OptionValue::new("Slow"),
    OptionValue::new("Normal"),
    OptionValue::new("Fast"),
    OptionValue::new("Very Fast"),
];

const OVERCLOCK_LEVELS: &[OptionValue<'static>] = &[
    OptionValue::labeled("None", "disabled"),
    OptionValue::new("Low"),
    OptionValue::new("Medium"),
    OptionValue::new("High"),
    OptionValue::new("Very High"),
];

const OVERCLOCK_TYPES: &[OptionValue<'static>] = &[
    OptionValue::new("Before NMI (Recommended)"),
    OptionValue::new("After NMI"),
];

const RAM_STATES: &[OptionValue<'static>] = &[
    OptionValue::labeled("All 0s (Default)", "Set all bits to 0"),
    OptionValue::labeled("All 1s", "Set all bits to 1"),
    OptionValue::labeled("Random Values", "Randomize values"),
];

pub const OPTIONS: &[OptionDef<'static>] = &[
    OptionDef {
        id: "mesen_region",
        title: "System Region",
        subtitle: None,
        description: Some("Change the region of the emulated system. When set to 'Auto', the hardware region will be detected based on the chosen content. If automatic detection is not possible, the NTSC region will be used by default. The 'Dendy' option is used to mimic a number of different NES clones."),
        category_id: Some("system"),
        values: REGIONS,
        default_value: Some("Auto"),
    },
    OptionDef {
        id: "mesen_fdsautoinsertdisk",
        title: "FDS - Auto-insert Disks",
        subtitle: None,
        description: Some("Automatically insert disks when needed for Famicom Disk System games."),
        category_id: Some("system"),
        values: TOGGLE,
        default_value: Some("disabled"),
    },
    OptionDef {
        id: "mesen_fdsfastforwardload",
        title: "FDS - Fast-Forward Load Screens",
        subtitle: None,
        description: Some("Increase emulation speed temporarily while Famicom Disk System games are loading data from the disks. While being inaccurate, this allows to greatly reduce the time spent on loading screens."),
        category_id: Some("system"),
        values: TOGGLE,
        default_value: Some("disabled"),
    },
    OptionDef {
        id: "mesen_aspect_ratio",
        title: "Aspect Ratio",
        subtitle: None,
        description: Some("Define which aspect ratio should be used. 'Auto' will switch automatically between NTSC and PAL, depending on the chosen content. 'No Stretching' will preserve the unaltered almost-square ratio that is intrinsic to Famicom/NES systems. RetroArch's aspect ratio must be set to 'Core Provided' in the Video settings to achieve the best results."),
        category_id: Some("video_general"),
        values: ASPECT_RATIOS,
        default_value: Some("Auto"),
    },
    OptionDef {
        id: "mesen_overscan_up",
        title: "Mask Overscan (Top)",
        subtitle: None,
        description: Some("Mask out the potentially random glitchy video output on the top edge of the screen, that would have been hidden by the bezel around the edge of a standard-definition television panel."),
        category_id: Some("video_general"),
        values: OVERSCAN_SIZES,
        default_value: Some("None"),
    },
    OptionDef {
        id: "mesen_overscan_down",
        title: "Mask Overscan (Bottom)",
        subtitle: None,
        description: Some("Mask out the potentially random glitchy video output on the bottom edge of the screen, that would have been hidden by the bezel around the edge of a standard-definition television panel."),
        category_id: Some("video_general"),
        values: OVERSCAN_SIZES,
        default_value: Some("None"),
    },
    OptionDef {
        id: "mesen_overscan_left",
        title: "Mask Overscan (Left)",
        subtitle: None,
        description: Some("Mask out the potentially random glitchy video output on the left edge of the screen, that would have been hidden by the bezel around the edge of a standard-definition television panel."),
        category_id: Some("video_general"),
        values: OVERSCAN_SIZES,
        default_value: Some("None"),
    },
    OptionDef {
        id: "mesen_overscan_right",
        title: "Mask Overscan (Right)",
        subtitle: None,
        description: Some("Mask out the potentially random glitchy video output on the right edge of the screen, that would have been hidden by the bezel around the edge of a standard-definition television panel."),
        category_id: Some("video_general"),
        values: OVERSCAN_SIZES,
        default_value: Some("None"),
    },
    OptionDef {
        id: "mesen_screenrotation",
        title: "Screen Rotation",
        subtitle: None,
        description: Some("Rotate the display by the specified angle. This option is useful when playing games designed for a vertical display."),
        category_id: Some("video_general"),
        values: ROTATIONS,
        default_value: Some("None"),
    },
    OptionDef {
        id: "mesen_fps_mode",
        title: "FPS Mode",
        subtitle: None,
        description: Some("Define which FPS rate should be used. Setting this option to 'Integer' will force the core to produce exactly an output of either 50fps (for PAL content) or 60fps (for NTSC content). This may help reduce dropped frames during gameplay."),
        category_id: Some("video_general"),
        values: FPS_MODES,
        default_value: Some("Mesen"),
    },
    OptionDef {
        id: "mesen_hdpacks",
        title: "Use HDNes HD Packs",
        subtitle: None,
        description: Some("Enable the use of HD Packs, which allow to replace a game's graphics and audio with high definition alternatives. For the packs to be loaded properly, it is necessary to have a folder named 'HdPacks' in the RetroArch System/BIOS directory, then store the HD Pack data in a subfolder with the same name of the chosen content: for instance, RA System/BIOS folder -> HdPacks -> Mega Man (USA)."),
        category_id: Some("video_general"),
        values: TOGGLE,
        default_value: Some("enabled"),
    },
    OptionDef {
        id: "mesen_palette",
        title: "Palette",
        subtitle: None,
        description: Some("Color palette to be used. If 'Custom' is selected, the palette used will be taken from the 'MesenPalette.pal' file placed in the RetroArch System/BIOS directory."),
        category_id: Some("video_image_adjustments"),
        values: PALETTES,
        default_value: Some("Default"),
    },
    OptionDef {
        id: "mesen_image",
        title: "Image Values",
        subtitle: None,
        description: Some("Define whether the values of the image output should be set to default or allow for further tweaking."),
        category_id: Some("video_image_adjustments"),
        values: IMAGE_MODES,
        default_value: Some("Default"),
    },
    OptionDef {
        id: "mesen_brightness",
        title: "Brightness",
        subtitle: None,
        description: Some("Adjust the brightness values of the image output."),
        category_id: Some("video_image_adjustments"),
        values: SIGNED_LEVELS,
        default_value: Some("0.00"),
    },
    OptionDef {
        id: "mesen_contrast",
        title: "Contrast",
        subtitle: None,
        description: Some("Adjust the contrast values of the image output."),
        category_id: Some("video_image_adjustments"),
        values: SIGNED_LEVELS,
        default_value: Some("0.00"),
    },
    OptionDef {
        id: "mesen_saturation",
        title: "Saturation",
        subtitle: None,
        description: Some("Adjust the saturation values of the image output."),
        category_id: Some("video_image_adjustments"),
        values: SIGNED_LEVELS,
        default_value: Some("0.00"),
    },
    OptionDef {
        id: "mesen_hue",
        title: "Hue",
        subtitle: None,
        description: Some("Adjust the hue values of the image output."),
        category_id: Some("video_image_adjustments"),
        values: SIGNED_LEVELS,
        default_value: Some("0.00"),
    },
    OptionDef {
        id: "mesen_scanlines",
        title: "Scanlines",
        subtitle: None,
        description: Some("Adjust the intensity of the internal scanlines. If applying an NTSC filter, the internal scanlines will only work with Blargg variants and Bisqwit 2x (either default or custom)."),
        category_id: Some("video_image_adjustments"),
        values: SCANLINE_LEVELS,
        default_value: Some("0.00"),
    },
    OptionDef {
        id: "mesen_ntsc_filter",
        title: "Filter",
        subtitle: None,
        description: Some("Apply a video filter to the picture, such as the ones replicating the NTSC signal processing. Setting this to any of the 'NTSC Custom' options allows more granular tweaking of each value of the NTSC filter."),
        category_id: Some("video_image_adjustments"),
        values: NTSC_FILTERS,
        default_value: Some("Disabled"),
    },
    OptionDef {
        id: "mesen_ntsc_artifacts",
        title: "NTSC Filter Artifacts",
        subtitle: None,
        description: Some("Adjust the intensity of the artifacts when using the 'NTSC Custom (Blargg)' filter."),
        category_id: Some("video_image_adjustments"),
        values: SIGNED_LEVELS,
        default_value: Some("0.00"),
    },
    OptionDef {
        id: "mesen_ntsc_bleed",
        title: "NTSC Filter Color Bleed",
        subtitle: None,
        description: Some("Adjust the intensity of the color bleed effect when using the 'NTSC Custom (Blargg)' filter."),
        category_id: Some("video_image_adjustments"),
        values: SIGNED_LEVELS,
        default_value: Some("0.00"),
    },
    OptionDef {
        id: "mesen_ntsc_fringing",
        title: "NTSC Filter Fringing",
        subtitle: None,
        description: Some("Adjust the intensity of the fringing effect when using the 'NTSC Custom (Blargg)' filter."),
        category_id: Some("video_image_adjustments"),
        values: SIGNED_LEVELS,
        default_value: Some("0.00"),
    },
    OptionDef {
        id: "mesen_ntsc_gamma",
        title: "NTSC Filter Gamma",
        subtitle: None,
        description: Some("Adjust the gamma level of the image output when using the 'NTSC Custom (Blargg)' filter."),
        category_id: Some("video_image_adjustments"),
        values: SIGNED_LEVELS,
        default_value: Some("0.00"),
    },
    OptionDef {
        id: "mesen_ntsc_resolution",
        title: "NTSC Filter Resolution",
        subtitle: None,
        description: Some("Adjust the resolution of the image output when using the 'NTSC Custom (Blargg)' filter."),
        category_id: Some("video_image_adjustments"),
        values: SIGNED_LEVELS,
        default_value: Some("0.00"),
    },
    OptionDef {
        id: "mesen_ntsc_sharpness",
        title: "NTSC Filter Sharpness",
        subtitle: None,
        description: Some("Adjust the sharpness of the image output when using the 'NTSC Custom (Blargg)' filter."),
        category_id: Some("video_image_adjustments"),
        values: SIGNED_LEVELS,
        default_value: Some("0.00"),
    },
    OptionDef {
        id: "mesen_ntsc_merge_fields",
        title: "NTSC Filter Merge Fields",
        subtitle: None,
        description: Some("Define whether odd and even fields should be merged when applying the NTSC filter to the video output."),
        category_id: Some("video_image_adjustments"),
        values: TOGGLE,
        default_value: Some("disabled"),
    },
    OptionDef {
        id: "mesen_ntsc_yFilterLength",
        title: "NTSC Y Filter (Horizontal Blur)",
        subtitle: None,
        description: Some("Adjust the intensity of the horizontal blur effect applied to the image output when using any of the 'NTSC Custom (Bisqwit)' filters."),
        category_id: Some("video_image_adjustments"),
        values: BLUR_LEVELS,
        default_value: Some("0.00"),
    },
    OptionDef {
        id: "mesen_ntsc_iFilterLength",
        title: "NTSC I Filter (Horizontal Bleed)",
        subtitle: None,
        description: Some("Adjust the intensity of the 'I Filter' horizontal bleed effect applied to the image output when using any of the 'NTSC Custom (Bisqwit)' filters."),
        category_id: Some("video_image_adjustments"),
        values: BLEED_LEVELS,
        default_value: Some("0.50"),
    },
    OptionDef {
        id: "mesen_ntsc_qFilterLength",
        title: "NTSC Q Filter (Horizontal Bleed)",
        subtitle: None,
        description: Some("Adjust the intensity of the 'Q Filter' horizontal bleed effect applied to the image output when using any of the 'NTSC Custom (Bisqwit)' filters."),
        category_id: Some("video_image_adjustments"),
        values: BLEED_LEVELS,
        default_value: Some("0.50"),
    },
    OptionDef {
        id: "mesen_ntsc_vertical_blend",
        title: "NTSC Filter Vertical Blending",
        subtitle: None,
        description: Some("Define whether vertical blending should be applied to the video output when using NTSC filters."),
        category_id: Some("video_image_adjustments"),
        values: TOGGLE,
        default_value: Some("enabled"),
    },
    OptionDef {
        id: "mesen_ntsc_keep_vertical_resolution",
        title: "NTSC Filter Keep Vertical Resolution",
        subtitle: None,
        description: Some("Choose whether the vertical resolution should be left unchanged when using NTSC filters."),
        category_id: Some("video_image_adjustments"),
        values: TOGGLE,
        default_value: Some("enabled"),
    },
    OptionDef {
        id: "mesen_audio_sample_rate",
        title: "Output Sample Rate",
        subtitle: None,
        description: Some("Define which audio sample rate should be used for this core."),
        category_id: Some("audio_general"),
        values: SAMPLE_RATES,
        default_value: Some("48000"),
    },
    OptionDef {
        id: "mesen_fake_stereo",
        title: "Fake Stereo",
        subtitle: None,
        description: Some("Apply a fake stereo effect to the audio output."),
        category_id: Some("audio_general"),
        values: TOGGLE,
        default_value: Some("disabled"),
    },
    OptionDef {
        id: "mesen_mute_triangle_ultrasonic",
        title: "Mute Ultrasonic Frequencies on Triangle Channel",
        subtitle: None,
        description: Some("Silence ultrasonic frequencies played through the triangle channel, to help reduce popping in the audio."),
        category_id: Some("audio_general"),
        values: TOGGLE,
        default_value: Some("disabled"),
    },
    OptionDef {
        id: "mesen_reduce_dmc_popping",
        title: "Reduce Popping on the DMC Channel",
        subtitle: None,
        description: Some("Prevent games from changing the output of the DMC channel too abruptly, to help reduce popping in the audio."),
        category_id: Some("audio_general"),
        values: TOGGLE,
        default_value: Some("disabled"),
    },
    OptionDef {
        id: "mesen_swap_duty_cycle",
        title: "Swap Square Channel Duty Cycles",
        subtitle: None,
        description: Some("Reproduce the output of some older NES clones that had incorrect sound output for both of the square channels. Enabling this option greatly alters the sound in some games. It should be activated only if the altered effect is desired."),
        category_id: Some("audio_general"),
        values: TOGGLE,
        default_value: Some("disabled"),
    },
    OptionDef {
        id: "mesen_disable_noise_mode_flag",
        title: "Disable Noise Channel Mode Flag",
        subtitle: None,
        description: Some("Reproduce the output of very early Famicom models that did not make use of the noise channel flag. Enabling this option alters the noise channel in some games. It should be activated only if the altered effect is desired."),
        category_id: Some("audio_general"),
        values: TOGGLE,
        default_value: Some("disabled"),
    },
    OptionDef {
        id: "mesen_controllerturbospeed",
        title: "Controller Turbo Speed",
        subtitle: None,
        description: Some("Set the speed of the controller Turbo buttons, as defined internally in the core."),
        category_id: Some("input"),
        values: TURBO_SPEEDS,
        default_value: Some("Fast"),
    },
    OptionDef {
        id: "mesen_shift_buttons_clockwise",
        title: "Shift Buttons Clockwise",
        subtitle: None,
        description: Some("Rotate the A/B/X/Y buttons clockwise."),
        category_id: Some("input"),
        values: TOGGLE,
        default_value: Some("disabled"),
    },
    OptionDef {
        id: "mesen_nospritelimit",
        title: "Remove Sprite Limit",
        subtitle: None,
        description: Some("Remove the limit that prevents the system from drawing more than 8 sprites per line, bringing the maximum amount of sprites to 64. This can help reduce the flickering seen in some games."),
        category_id: Some("hacks"),
        values: TOGGLE,
        default_value: Some("disabled"),
    },
    OptionDef {
        id: "mesen_overclock",
        title: "Overclock",
        subtitle: None,
        description: Some("Increase the effective clock rate of the emulated system. Overclocking can help reduce or remove slowdowns in games, but it can also cause issues."),
        category_id: Some("hacks"),
        values: OVERCLOCK_LEVELS,
        default_value: Some("None"),
    },
    OptionDef {
        id: "mesen_overclock_type",
        title: "Overclock Type",
        subtitle: None,
        description: Some("Define whether the overclocking should be applied before or after the NMI signal is triggered at the end of the visible frame."),
        category_id: Some("hacks"),
        values: OVERCLOCK_TYPES,
        default_value: Some("Before NMI (Recommended)"),
    },
    OptionDef {
        id: "mesen_ramstate",
        title: "RAM Power-on State",
        subtitle: None,
        description: Some("Choose whether the system RAM should be initialized by setting all bits to 0, 1 or entirely random values. For example, some games may rely on the initial RAM values for random number generation."),
        category_id: Some("hacks"),
        values: RAM_STATES,
        default_value: Some("All 0s (Default)"),
    },
];

/// English option table, the base of every locale table.
pub static OPTIONS_US: Schema<'static> = Schema::new(CATEGORIES, OPTIONS);
