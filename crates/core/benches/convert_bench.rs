// Performance benchmarks for the conversion engine
//
// Run with: cargo bench --bench convert_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use passerelle_core::convert::{self, tables};
use passerelle_core::domain::wire::*;

fn stereo_device_source(id: i32) -> WirePortConfig {
    WirePortConfig {
        id,
        role: WirePortRole::Source,
        port_type: WirePortType::Device,
        config_mask: 0b10111,
        sample_rate: 48000,
        channel_mask: 0b11,
        format: 0x1,
        flags: WireIoFlags::Input(1 << WireInputFlag::Fast.index()),
        ext: WirePortExt::Device(WirePortDeviceExt {
            hw_module: 1,
            device_type: 0x4,
            address: "card=1;device=0".to_string(),
        }),
        ..Default::default()
    }
}

fn bench_mask_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask_translation");

    for mask in [0x1i32, 0xf, 0x7fff].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(mask), mask, |b, &mask| {
            b.iter(|| {
                black_box(tables::output_flags_mask_from_wire(black_box(mask)).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_port_config_conversion(c: &mut Criterion) {
    let wire = stereo_device_source(1);
    let native = convert::port_config_from_wire(&wire).unwrap();

    c.bench_function("port_config_from_wire", |b| {
        b.iter(|| {
            black_box(convert::port_config_from_wire(black_box(&wire)).unwrap());
        });
    });

    c.bench_function("port_config_to_wire", |b| {
        b.iter(|| {
            black_box(convert::port_config_to_wire(black_box(&native)).unwrap());
        });
    });
}

fn bench_patch_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("patch_from_wire");

    for num_ports in [1usize, 4, 8, 16].iter() {
        let wire = WirePatch {
            id: 1,
            sinks: (0..*num_ports as i32).map(stereo_device_source).collect(),
            sources: vec![],
        };

        group.bench_with_input(
            BenchmarkId::new("sink_ports", num_ports),
            num_ports,
            |b, _| {
                b.iter(|| {
                    black_box(convert::patch_from_wire(black_box(&wire)).unwrap());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mask_translation,
    bench_port_config_conversion,
    bench_patch_conversion
);

criterion_main!(benches);
