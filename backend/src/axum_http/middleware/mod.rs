pub mod subscription_gate;
