use super::interactions::hit_from_event;
use fivestars_core::render::{
    GRADIENT_X1, GRADIENT_X2, GRADIENT_Y1, GRADIENT_Y2, LEFT_POINTS, RIGHT_POINTS, STAR_CLASS,
    STAR_SVG_CLASS, SVG_HEIGHT, SVG_WIDTH, VIEW_BOX,
};
use fivestars_core::{GradientFill, Side, StarHit, StarPaint, StarTemplate};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StarProps {
    pub position: usize,
    pub template: StarTemplate,
    pub paint: StarPaint,
    pub on_hover: Callback<StarHit>,
    pub on_leave: Callback<()>,
    pub on_commit: Callback<StarHit>,
}

fn gradient(fill: &GradientFill) -> Html {
    html! {
        <linearGradient
            id={fill.id.clone()}
            gradientUnits="userSpaceOnUse"
            x1={GRADIENT_X1}
            y1={GRADIENT_Y1}
            x2={GRADIENT_X2}
            y2={GRADIENT_Y2}
        >
            <stop offset="0" style={format!("stop-color:{}", fill.start)} />
            <stop offset="1" style={format!("stop-color:{}", fill.end)} />
        </linearGradient>
    }
}

#[function_component(Star)]
pub fn star(props: &StarProps) -> Html {
    let tpl = &props.template;
    let position = props.position;

    let onmouseover = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |e: MouseEvent| on_hover.emit(hit_from_event(position, &e)))
    };
    let onmouseleave = {
        let on_leave = props.on_leave.clone();
        Callback::from(move |_: MouseEvent| on_leave.emit(()))
    };
    let onclick = {
        let on_commit = props.on_commit.clone();
        Callback::from(move |e: MouseEvent| on_commit.emit(hit_from_event(position, &e)))
    };

    html! {
        <div
            class={STAR_CLASS}
            data-position={props.position.to_string()}
            style={tpl.wrapper_style()}
            {onmouseover}
            {onmouseleave}
            {onclick}
        >
            <svg
                version="1.1"
                class={STAR_SVG_CLASS}
                xmlns="http://www.w3.org/2000/svg"
                x="0px"
                y="0px"
                width={SVG_WIDTH}
                height={SVG_HEIGHT}
                viewBox={VIEW_BOX}
                style={tpl.svg_style()}
            >
                <style>{ tpl.scope.stylesheet() }</style>
                { for tpl.gradients.iter().map(gradient) }
                <polygon
                    data-side={Side::Left.as_str()}
                    class={tpl.class_for(props.paint.left)}
                    points={LEFT_POINTS}
                />
                <polygon
                    data-side={Side::Right.as_str()}
                    class={tpl.class_for(props.paint.right)}
                    points={RIGHT_POINTS}
                />
            </svg>
        </div>
    }
}
