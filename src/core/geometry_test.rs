use super::*;

#[test]
fn unit_quad_at_origin_matches_clockwise_layout() {
    let v = vertex_rect(0.0, 0.0, 2.0, 2.0);
    #[rustfmt::skip]
    let expected: [f32; QUAD_FLOATS] = [
        0.0,  0.0, 0.0, 0.0, 0.0,
        2.0,  0.0, 0.0, 1.0, 0.0,
        2.0, -2.0, 0.0, 1.0, 1.0,
        0.0, -2.0, 0.0, 0.0, 1.0,
    ];
    assert_eq!(v, expected);
}

#[test]
fn uv_assignment_is_independent_of_rect_placement() {
    let v = vertex_rect(-0.75, 0.3, 1.5, 0.8);
    // UV 分量固定为 (0,0) (1,0) (1,1) (0,1)，与矩形位置无关
    for (i, (u, vv)) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
        .into_iter()
        .enumerate()
    {
        assert_eq!(v[i * 5 + 3], u);
        assert_eq!(v[i * 5 + 4], vv);
    }
}

#[test]
fn zero_size_produces_degenerate_quad_without_panicking() {
    let v = vertex_rect(0.5, 0.5, 0.0, 0.0);
    // 四个顶点坍缩到同一点
    for i in 0..4 {
        assert_eq!(v[i * 5], 0.5);
        assert_eq!(v[i * 5 + 1], 0.5);
    }
}

#[test]
fn negative_size_inverts_the_quad() {
    let v = vertex_rect(0.0, 0.0, -1.0, -1.0);
    // 右边缘跑到左侧，下边缘跑到上方
    assert_eq!(v[5], -1.0); // 第二个顶点 x = x + w
    assert_eq!(v[11], 1.0); // 第三个顶点 y = y - h
}

#[test]
fn index_list_covers_two_triangles_over_four_vertices() {
    assert_eq!(QUAD_INDICES.len(), 6);
    assert_eq!(QUAD_INDICES, [0, 1, 2, 0, 2, 3]);
    assert!(QUAD_INDICES.iter().all(|&i| i < 4));
}
