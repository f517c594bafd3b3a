mod support;

use prismnet::net::compute_net;
use prismnet::render::render_net;

#[test]
fn renders_a_nonempty_pdf() {
    let params = support::lampshade_params();
    let net = compute_net(&params).unwrap();

    let path = std::env::temp_dir().join("prismnet_render_smoke.pdf");
    render_net(&net, &params, &path).unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0, "PDF should not be empty");
    let _ = std::fs::remove_file(&path);
}
