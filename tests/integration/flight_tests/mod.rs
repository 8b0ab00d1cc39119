mod camera;
mod input;
mod plugin;
