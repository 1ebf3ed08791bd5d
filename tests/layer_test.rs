use layerscope::{
    Blob, BlobShape, Convolution, InputLayer, Layer, LayerError, LayerOptions, LayerType,
    NumericKind, Pair, Pooling,
};

fn chw(c: usize, h: usize, w: usize) -> BlobShape {
    BlobShape::new(vec![c, h, w]).unwrap()
}

/// Scenario: Conv 3->16, kernel 3, stride 1, padding 1 on (3, 32, 32).
#[test]
fn test_convolution_shape_and_memory() {
    let conv = Convolution::with_options(
        "c1",
        3,
        16,
        3,
        LayerOptions {
            stride: Some(Pair::from(1)),
            padding: Some(Pair::from(1)),
            datatype: Some(NumericKind::Single),
            paramtype: Some(NumericKind::Single),
        },
    )
    .unwrap();

    let bottom = [chw(3, 32, 32)];
    let top = conv.output_shape(&bottom).unwrap();
    assert_eq!(top.dims(), &[16, 32, 32]);

    assert_eq!(conv.num_params(), 3 * 3 * 3 * 16);
    assert_eq!(conv.num_params(), 432);
    assert_eq!(conv.data_memory(&bottom).unwrap(), 16 * 32 * 32 * 4);
    assert_eq!(conv.data_memory(&bottom).unwrap(), 65536);
    assert_eq!(conv.param_memory(), 432 * 4);
    assert_eq!(conv.memory_usage(&bottom).unwrap(), 65536 + 1728);
}

/// Scenario: Pooling kernel 2, stride 2 on (16, 32, 32) halves the spatial
/// extent and keeps channels.
#[test]
fn test_pooling_shape() {
    let pool = Pooling::with_options(
        "p1",
        16,
        16,
        2,
        LayerOptions {
            stride: Some(Pair::from(2)),
            ..LayerOptions::default()
        },
    )
    .unwrap();

    let top = pool.output_shape(&[chw(16, 32, 32)]).unwrap();
    assert_eq!(top.dims(), &[16, 16, 16]);
    assert_eq!(pool.num_params(), 0);
    assert_eq!(pool.param_memory(), 0);
}

/// Scenario: Input wrapping a (3, 224, 224) single-precision tensor.
#[test]
fn test_input_layer_memory() {
    let blob = Blob::zeros(chw(3, 224, 224), NumericKind::Single);
    let input = InputLayer::new(blob, "data").unwrap();

    assert_eq!(input.output_shape(&[]).unwrap().dims(), &[3, 224, 224]);
    assert_eq!(input.data_memory(&[]).unwrap(), 3 * 224 * 224 * 4);
    assert_eq!(input.num_params(), 0);
    assert_eq!(input.param_memory(), 0);
    assert!(input.data().is_some());
    assert!(input.params().is_none());
}

#[test]
fn test_input_layer_rejects_bottom_shapes() {
    let blob = Blob::zeros(chw(1, 4, 4), NumericKind::Single);
    let input = InputLayer::new(blob, "data").unwrap();
    assert!(matches!(
        input.output_shape(&[chw(1, 4, 4)]),
        Err(LayerError::Shape { .. })
    ));
}

#[test]
fn test_scalar_and_pair_kernel_build_the_same_layer() {
    let a = Convolution::new("c", 3, 8, 3).unwrap();
    let b = Convolution::new("c", 3, 8, (3, 3)).unwrap();
    assert_eq!(a.kernel(), b.kernel());
    assert_eq!(a.stride(), b.stride());
    assert_eq!(a.padding(), b.padding());
    assert_eq!(a.num_params(), b.num_params());
}

#[test]
fn test_construction_defaults() {
    let conv = Convolution::new("c", 3, 8, 5).unwrap();
    assert_eq!(conv.stride(), Pair::new(1, 1));
    assert_eq!(conv.padding(), Pair::new(0, 0));
    assert_eq!(conv.datatype(), NumericKind::Single);
    assert_eq!(conv.paramtype(), NumericKind::Single);
}

#[test]
fn test_invalid_construction_parameters() {
    assert!(matches!(
        Convolution::new("c", 0, 8, 3),
        Err(LayerError::InvalidParameter { .. })
    ));
    assert!(matches!(
        Convolution::new("c", 3, 0, 3),
        Err(LayerError::InvalidParameter { .. })
    ));
    assert!(matches!(
        Convolution::new("c", 3, 8, 0),
        Err(LayerError::InvalidParameter { .. })
    ));
    assert!(matches!(
        Convolution::new("", 3, 8, 3),
        Err(LayerError::InvalidParameter { .. })
    ));
    assert!(matches!(
        Pooling::with_options(
            "p",
            8,
            8,
            2,
            LayerOptions {
                stride: Some(Pair::new(0, 2)),
                ..LayerOptions::default()
            },
        ),
        Err(LayerError::InvalidParameter { .. })
    ));
}

/// A kernel larger than the padded input has no valid output position.
#[test]
fn test_kernel_larger_than_padded_input() {
    let conv = Convolution::new("c", 3, 8, 7).unwrap();
    assert!(matches!(
        conv.output_shape(&[chw(3, 5, 5)]),
        Err(LayerError::Shape { .. })
    ));

    // Padding of 1 on each side makes the 7x7 window fit exactly once.
    let padded = Convolution::with_options(
        "c",
        3,
        8,
        7,
        LayerOptions {
            padding: Some(Pair::from(1)),
            ..LayerOptions::default()
        },
    )
    .unwrap();
    assert_eq!(padded.output_shape(&[chw(3, 5, 5)]).unwrap().dims(), &[8, 1, 1]);
}

/// Padding large enough to overflow the padded-input arithmetic is a
/// shape error, not a panic.
#[test]
fn test_oversized_padding_is_a_shape_error() {
    let conv = Convolution::with_options(
        "c",
        3,
        8,
        3,
        LayerOptions {
            padding: Some(Pair::from(usize::MAX / 2 + 1)),
            ..LayerOptions::default()
        },
    )
    .unwrap();
    assert!(matches!(
        conv.output_shape(&[chw(3, 8, 8)]),
        Err(LayerError::Shape { .. })
    ));
}

#[test]
fn test_malformed_bottom_shapes() {
    let conv = Convolution::new("c", 3, 8, 3).unwrap();
    assert!(matches!(
        conv.output_shape(&[]),
        Err(LayerError::Shape { .. })
    ));
    assert!(matches!(
        conv.output_shape(&[chw(3, 8, 8), chw(3, 8, 8)]),
        Err(LayerError::Shape { .. })
    ));
    assert!(matches!(
        conv.output_shape(&[BlobShape::new(vec![3, 8]).unwrap()]),
        Err(LayerError::Shape { .. })
    ));
}

#[test]
fn test_pooling_channel_mismatch() {
    let pool = Pooling::new("p", 16, 16, 2).unwrap();
    assert!(matches!(
        pool.output_shape(&[chw(8, 32, 32)]),
        Err(LayerError::Shape { .. })
    ));
}

/// Shape inference is pure: repeated queries agree.
#[test]
fn test_shape_inference_determinism() {
    let conv = Convolution::new("c", 3, 16, 3).unwrap();
    let bottom = [chw(3, 32, 32)];
    assert_eq!(
        conv.output_shape(&bottom).unwrap(),
        conv.output_shape(&bottom).unwrap()
    );
    assert_eq!(
        conv.memory_usage(&bottom).unwrap(),
        conv.memory_usage(&bottom).unwrap()
    );
}

#[test]
fn test_memory_usage_is_exact_sum() {
    for kind in [NumericKind::Uint, NumericKind::Single, NumericKind::Double] {
        let conv = Convolution::with_options(
            "c",
            3,
            16,
            3,
            LayerOptions {
                datatype: Some(kind),
                paramtype: Some(kind),
                ..LayerOptions::default()
            },
        )
        .unwrap();
        let bottom = [chw(3, 32, 32)];
        assert_eq!(
            conv.memory_usage(&bottom).unwrap(),
            conv.data_memory(&bottom).unwrap() + conv.param_memory()
        );
        assert_eq!(conv.param_memory(), 432 * kind.byte_width());
    }
}

#[test]
fn test_layer_type_tags() {
    assert_eq!(serde_json::to_string(&LayerType::Input).unwrap(), "\"Input\"");
    assert_eq!(
        serde_json::to_string(&LayerType::Convolution).unwrap(),
        "\"Convolution\""
    );
    assert_eq!(serde_json::to_string(&LayerType::Pooling).unwrap(), "\"Pooling\"");
}

/// Walks a small network as a collaborator would: chain each layer's
/// output shape into the next and sum the per-layer footprints.
#[test]
fn test_network_walk_through_trait_objects() {
    let input = InputLayer::new(Blob::zeros(chw(3, 32, 32), NumericKind::Single), "data").unwrap();
    let conv = Convolution::with_options(
        "c1",
        3,
        16,
        3,
        LayerOptions {
            padding: Some(Pair::from(1)),
            ..LayerOptions::default()
        },
    )
    .unwrap();
    let pool = Pooling::with_options(
        "p1",
        16,
        16,
        2,
        LayerOptions {
            stride: Some(Pair::from(2)),
            ..LayerOptions::default()
        },
    )
    .unwrap();
    let layers: Vec<Box<dyn Layer>> = vec![Box::new(input), Box::new(conv), Box::new(pool)];

    let mut bottom: Vec<BlobShape> = Vec::new();
    let mut total = 0usize;
    for layer in &layers {
        let top = layer.output_shape(&bottom).unwrap();
        total += layer.memory_usage(&bottom).unwrap();
        bottom = vec![top];
    }

    assert_eq!(bottom[0].dims(), &[16, 16, 16]);
    // input 3*32*32*4 + conv (16*32*32*4 + 432*4) + pool 16*16*16*4
    assert_eq!(total, 12288 + 65536 + 1728 + 16384);
}
