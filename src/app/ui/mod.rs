mod charts;
mod controls;
mod panels;
mod range_slider;
