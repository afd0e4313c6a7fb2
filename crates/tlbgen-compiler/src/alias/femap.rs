//! Curated alias table for the Femap automation library.

use super::AliasRule;

/// `(source enum, filter prefix, alias, strip prefix, nested)`, in output order.
#[rustfmt::skip]
const RULES: &[(&str, Option<&str>, &str, &str, bool)] = &[
    // Return codes and messages
    ("zReturnCode", None, "ReturnCode", "FE_", false),
    ("zMessageColor", None, "Message", "FCM_", false),

    // Entity types
    ("zDataType", None, "Entity", "FT_", false),
    ("zElementType", None, "ElemType", "FET_", false),
    ("zTopologyType", None, "Topo", "FTO_", false),
    ("zMaterialType", None, "MatlType", "FMT_", false),
    ("zNodeType", None, "NodeType", "FNT_", false),

    // Analysis
    ("zAnalysisType", None, "Analysis", "FAT_", false),
    ("zAnalysisProgram", None, "Solver", "FAP_", false),

    ("zCSysType", None, "CSys", "FCS_", false),

    // Groups
    ("zGroupBooleanOp", None, "GroupOp", "FGB_", false),
    ("zGroupDataType", None, "GroupType", "FGR_", false),
    ("zGroupDefinitionType", None, "GroupDef", "FGD_", true),

    // Display. zColor also carries the brush pattern and pen style families.
    ("zColor", None, "Color", "FCL_", false),
    ("zColor", Some("FPF_"), "BrushPattern", "FPF_", false),
    ("zColor", Some("FPL_"), "PenLineStyle", "FPL_", false),
    ("zViewMode", None, "ViewMode", "FVM_", false),
    ("zViewOptions", None, "ViewOptions", "FVI_", false),

    // Loads
    ("zLoadType", None, "LoadType", "FLT_", false),
    ("zLoadDirection", None, "LoadDir", "FLD_", false),
    ("zLoadVariation", None, "LoadVar", "FLV_", false),

    // Results
    ("zResultsLocation", None, "ResultsLoc", "FRL_", false),
    ("zOutputType", None, "OutputType", "FOT_", false),
    ("zOutputComplex", None, "OutputComplex", "FOC_", false),

    ("zFunctionType", None, "FuncType", "FFT_", false),

    // Meshing
    ("zMeshApproach", None, "MeshApproach", "FMA_", false),
    ("zMesherType", None, "MesherType", "FME_", false),

    ("zSelectorType", None, "SelectorType", "FST_", false),

    // Geometry
    ("zCurveType", None, "CurveType", "FCT_", false),
    ("zSurfaceType", None, "SurfaceType", "FSU_", false),
    ("zPointType", None, "PointType", "FPT_", false),

    // Freebody
    ("zFbdComponent", None, "FbdComponent", "FFBC_", false),
    ("zFbdContribution", None, "FbdContrib", "FFBCN_", false),
    ("zFbdDisplayMode", None, "FbdDisplay", "FFBD_", false),

    // Connections
    ("zConnectionRegionType", None, "ConnRegion", "FCR_", false),
    ("zConnectionPropType", None, "ConnProp", "FCP_", false),

    // Charts. FCS_ is shared with zCSysType.
    ("zChartStyle", None, "ChartStyle", "FCS_", false),
    ("zChartSeriesType", None, "ChartSeries", "FCST_", false),

    ("zLibraryFile", None, "LibFile", "FLF_", false),
    ("zAlignment", None, "Align", "FAL_", false),
    ("zFeatureType", None, "Feature", "FFE_", false),
    ("zOutputDestination", None, "OutputDest", "FOD_", false),
    ("zCombinedMode", None, "CombinedMode", "FCBM_", false),
    ("zFbdVecMode", None, "FbdVecMode", "FBD_", false),
    ("zResultsConvert", None, "ResultsConvert", "FRC_", false),
    ("zCoordPick", None, "CoordPick", "FCP_", false),
    ("zAnalysisAssignForm", None, "AnalysisForm", "FAF_", false),
    ("zOptBoundtype", None, "OptBound", "FOB_", false),

    // Vector and plate results
    ("zVecPlateResult", None, "VecPlateResult", "FVPR_", false),
    ("zVecPlateType", None, "VecPlateType", "FVPT_", false),
    ("zVecSolidLamLoc", None, "VecSolidLoc", "FVSL_", false),
    ("zVecSolidLamResult", None, "VecSolidResult", "FVSR_", false),

    // Graphics
    ("zGFXEdgeFlags", None, "GfxEdge", "FGFX_", false),
    ("zGFXPointSymbol", None, "GfxSymbol", "FGFXPS_", false),
    ("zGFXArrowMode", None, "GfxArrow", "FGFXA_", false),

    ("zVisibilityType", None, "Visibility", "FVT_", false),
    ("zShapeEvaluator", None, "ShapeEval", "FSE_", false),
    ("zShapeOrient", None, "ShapeOrient", "FSO_", false),
    ("zDataConvert", None, "DataConvert", "FDC_", false),

    // Chart axes and labels
    ("zChartAxisStyle", None, "ChartAxis", "FCAS_", false),
    ("zChartNumberFormat", None, "ChartNumFmt", "FCNF_", false),
    ("zChartMarkerStyle", None, "ChartMarker", "FCMS_", false),
    ("zChartLegendLocation", None, "ChartLegend", "FCLL_", false),
    ("zChartTextJustification", None, "ChartJustify", "FCTJ_", false),

    ("zBeamCalculatorStressComponent", None, "BeamStress", "FBCSC_", false),

    // Monitor points
    ("zMptComponent", None, "MptComponent", "FMPC_", false),
    ("zMptContribution", None, "MptContrib", "FMPCN_", false),
];

pub(super) fn rules() -> Vec<AliasRule> {
    RULES
        .iter()
        .map(|&(source, filter, alias, strip, nested)| AliasRule {
            source_enum: source.to_string(),
            filter_prefix: filter.map(str::to_string),
            alias: alias.to_string(),
            strip_prefix: strip.to_string(),
            nested,
        })
        .collect()
}
